//! The impls and functions
//!
use std::env;

use log::*;

use crate::{CheckConfig, Opts, DEFAULT_CONSUL_ADDR, DEFAULT_SCHEME};

/// Build the immutable configuration for this run.
///
/// Every connection setting resolves as: command line option, then
/// environment variable (a `.env` file is honored via dotenv in main), then
/// compiled default.
pub fn build_config(options: &Opts) -> CheckConfig {
    CheckConfig {
        consul_addr: set_option(&options.consul_addr, "CHECK_CONSUL_ADDR", DEFAULT_CONSUL_ADDR),
        scheme: set_option(&options.scheme, "CHECK_CONSUL_SCHEME", DEFAULT_SCHEME),
        user: set_option(&options.user, "CHECK_CONSUL_USER", ""),
        password: set_secret_option(&options.password, "CHECK_CONSUL_PASSWORD"),
        warning: options.warning,
        critical: options.critical,
        services: split_services(&set_option(&options.services, "CHECK_CONSUL_SERVICES", "")),
    }
}

fn set_option(option: &Option<String>, env_var: &str, default: &str) -> String {
    if let Some(value) = option {
        info!("{} set via command line: {}", env_var, value);
        value.to_string()
    } else {
        match env::var(env_var) {
            Ok(value) => {
                info!("{} set via environment/.env: {}", env_var, value);
                value
            }
            Err(_e) => {
                info!("{} not set: using default: {}", env_var, default);
                default.to_string()
            }
        }
    }
}

// like set_option, but the value is kept out of the log
fn set_secret_option(option: &Option<String>, env_var: &str) -> String {
    if let Some(value) = option {
        info!("{} set via command line", env_var);
        value.to_string()
    } else {
        match env::var(env_var) {
            Ok(value) => {
                info!("{} set via environment/.env", env_var);
                value
            }
            Err(_e) => String::new(),
        }
    }
}

/// Split the comma separated service list.
///
/// An empty value means "all catalog services". Empty entries inside a
/// non-empty list are kept as-is: no service name validation is performed,
/// the catalog lookup simply reports whatever Consul answers for them.
pub fn split_services(services: &str) -> Vec<String> {
    if services.is_empty() {
        Vec::new()
    } else {
        services.split(',').map(str::to_string).collect()
    }
}
