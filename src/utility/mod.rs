//! Utilities: resolving the configuration from options, environment and defaults.
mod functions;

pub use functions::*;
