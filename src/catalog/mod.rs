//! Module for reading the service catalog of a Consul agent or server.
//!
//! Two endpoints are read:
//! - `/v1/catalog/services`: a mapping of service name to its tags, used to
//!   resolve "all services" when no explicit services are set. The mapping is
//!   kept in a BTreeMap, so evaluation order is sorted by service name.
//! - `/v1/catalog/service/<name>`: one entry per registered instance of the
//!   service; the plugin only uses the number of entries.
//!
//! Connection settings (address, scheme, basic authentication) are passed
//! through from the configuration unmodified.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
