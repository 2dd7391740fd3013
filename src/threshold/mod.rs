//! Module for the threshold evaluation: the decision that turns instance
//! counts into a plugin severity.
//!
//! The thresholds are lower bounds, `warning` at or above `critical`: fewer
//! registered instances is worse. A service triggers WARNING at
//! `count <= warning` and CRITICAL at `count <= critical`, and the severity
//! of a run is the maximum severity over all evaluated services.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
