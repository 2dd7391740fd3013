//! The structs
//!
use serde_derive::{Deserialize, Serialize};

/// One registered instance of a service, as returned by
/// `/v1/catalog/service/<name>`:
/// ```json
/// [
///   {
///     "ID": "40e4a748-2192-161a-0510-9bf59fe950b5",
///     "Node": "foobar",
///     "Address": "192.168.10.10",
///     "Datacenter": "dc1",
///     "ServiceID": "redis",
///     "ServiceName": "redis",
///     "ServiceAddress": "",
///     "ServiceTags": ["primary"],
///     "ServicePort": 8000
///   }
/// ]
/// ```
/// The plugin only counts the entries; the fields are optional so that
/// older and newer Consul versions both deserialize.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogService {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    pub node: Option<String>,
    pub address: Option<String>,
    pub datacenter: Option<String>,
    #[serde(rename = "ServiceID")]
    pub service_id: Option<String>,
    pub service_name: Option<String>,
    pub service_address: Option<String>,
    pub service_port: Option<u16>,
    pub service_tags: Option<Vec<String>>,
}
