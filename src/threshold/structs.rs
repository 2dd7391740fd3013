//! The structs
//!
use std::fmt;

/// Plugin severity, ordered by the Nagios plugin return code.
///
/// The derived order makes aggregation over services a plain `max`. The
/// numeric return codes are a fixed contract with the monitoring system and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Warning => write!(f, "WARNING"),
            Status::Critical => write!(f, "CRITICAL"),
            Status::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The lower bounds on the instance count of a service.
///
/// Negative values are accepted; a count can never reach a negative bound,
/// so such a threshold simply never triggers.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}
