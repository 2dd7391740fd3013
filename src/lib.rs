//! check_consul_service: a Nagios compatible plugin for the Consul service catalog.
//!
//! The plugin reads the catalog of a Consul agent or server, counts the
//! registered instances per service, and reports a single status line on
//! stdout plus an exit code following the Nagios plugin API:
//!
//! | exit code | meaning  |
//! |-----------|----------|
//! | 0         | OK       |
//! | 1         | WARNING  |
//! | 2         | CRITICAL |
//! | 3         | UNKNOWN  |
//!
//! The thresholds are lower bounds on the instance count: a service with
//! `count <= warning` instances is WARNING, with `count <= critical`
//! instances CRITICAL. Any failure to reach or parse the catalog, as well as
//! an invalid threshold combination, is UNKNOWN.

use clap::Parser;

pub mod catalog;
pub mod threshold;
pub mod utility;

/// The Consul address used when neither `--consul-addr` nor `CHECK_CONSUL_ADDR` is set.
pub const DEFAULT_CONSUL_ADDR: &str = "127.0.0.1:8500";
/// The URL scheme used when neither `--scheme` nor `CHECK_CONSUL_SCHEME` is set.
pub const DEFAULT_SCHEME: &str = "http";
/// Whether https certificates are accepted without verification.
pub const ACCEPT_INVALID_CERTS: bool = false;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Consul address as hostname:port
    #[arg(long, value_name = "HOST:PORT")]
    pub consul_addr: Option<String>,
    /// URL scheme to reach Consul with: http or https
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<String>,
    /// Basic authentication user, only used when a password is set too
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,
    /// Basic authentication password, only used when a user is set too
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,
    /// Warning when the instance count of a service is at or below this value
    #[arg(short = 'w', long, default_value_t = 1, value_name = "COUNT")]
    pub warning: i64,
    /// Critical when the instance count of a service is at or below this value
    #[arg(short = 'c', long, default_value_t = 0, value_name = "COUNT")]
    pub critical: i64,
    /// Comma separated list of services to check, default: all catalog services
    #[arg(short = 's', long, value_name = "SVC,SVC,..")]
    pub services: Option<String>,
}

/// The resolved, immutable configuration for one plugin run.
///
/// Built once by [utility::build_config] from the command line options, the
/// environment and the defaults, and passed by reference from there on.
#[derive(Debug)]
pub struct CheckConfig {
    pub consul_addr: String,
    pub scheme: String,
    pub user: String,
    pub password: String,
    pub warning: i64,
    pub critical: i64,
    /// Explicit services to check; empty means all catalog services.
    pub services: Vec<String>,
}
