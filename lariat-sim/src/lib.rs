//! Closed-loop catch-trial simulation for Lariat.
//!
//! A [`Simulation`] composes a PID controller and an inclined-rail body
//! over a fixed time grid. Each trial runs a fresh controller/body pair
//! for exactly one tick per grid point, recording a [`TickSample`] per
//! tick: platform and target positions, displacement, velocity,
//! acceleration, and the three controller error contributions.
//!
//! Per tick, data flows one way: position → controller → command →
//! body → new position → recorded sample. Targets are supplied through
//! [`TargetPath`] and evaluated at discrete grid times, never wall-clock;
//! the loop itself is single-threaded, synchronous, and deterministic.

mod config;
mod record;
mod simulation;
mod target;

pub use config::{CaptureWindow, ConfigError, SimulationConfig};
pub use record::{TickSample, TrialRecord};
pub use simulation::Simulation;
pub use target::{FreeFallTarget, TargetPath};
