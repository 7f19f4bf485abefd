//! Components for Lariat: a discrete PID feedback controller, a rigid
//! body on an inclined rail, and Euler-angle ↔ direction-cosine-matrix
//! attitude transforms.
//!
//! The controller and the body are stateful and advance tick by tick
//! under a simulation loop; the attitude transforms are pure functions of
//! their inputs and carry no state at all.

pub mod attitude;
pub mod body;
pub mod controller;
