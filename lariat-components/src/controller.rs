//! Feedback controllers.

mod pid;

pub use pid::{
    DerivativeGain, ErrorIntegral, IntegralGain, PidController, PidGains, ProportionalGain,
};
