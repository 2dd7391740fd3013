//! The impls and functions
//!
use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Context, Result};
use log::*;

use crate::catalog::CatalogService;
use crate::CheckConfig;

/// The client for the two catalog lookups the plugin performs.
pub struct CatalogClient {
    client: reqwest::blocking::Client,
    consul_addr: String,
    scheme: String,
    http_auth: Option<(String, String)>,
}

impl CatalogClient {
    pub fn new(config: &CheckConfig) -> Result<CatalogClient> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(crate::ACCEPT_INVALID_CERTS)
            .build()
            .with_context(|| "Error building http client")?;
        // basic authentication is only activated when both are set
        let http_auth = if !config.user.is_empty() && !config.password.is_empty() {
            Some((config.user.clone(), config.password.clone()))
        } else {
            None
        };
        Ok(CatalogClient {
            client,
            consul_addr: config.consul_addr.clone(),
            scheme: config.scheme.clone(),
            http_auth,
        })
    }

    /// Read `/v1/catalog/services`: every service name known to the catalog,
    /// with its tags, sorted by name.
    pub fn service_names(&self) -> Result<BTreeMap<String, Vec<String>>> {
        let data_from_http = self.http_get("v1/catalog/services")?;
        parse_services(&data_from_http)
    }

    /// Read `/v1/catalog/service/<name>`: one entry per registered instance.
    ///
    /// A name unknown to the catalog is not an error: Consul answers with an
    /// empty array, which counts as zero instances.
    pub fn service_instances(&self, service_name: &str) -> Result<Vec<CatalogService>> {
        let data_from_http = self.http_get(&format!("v1/catalog/service/{}", service_name))?;
        parse_service_instances(&data_from_http, service_name)
    }

    fn http_get(&self, path: &str) -> Result<String> {
        let url = format!("{}://{}/{}", self.scheme, self.consul_addr, path);
        info!("begin http read: {}", url);
        let timer = Instant::now();

        let mut request = self.client.get(&url);
        if let Some((user, password)) = &self.http_auth {
            request = request.basic_auth(user, Some(password));
        }
        let response = request
            .send()
            .with_context(|| format!("Error reading from URL: {}", url))?;
        debug!("response: {} = {}", url, response.status());
        let data_from_http = response
            .error_for_status()
            .with_context(|| format!("Error response from URL: {}", url))?
            .text()
            .with_context(|| format!("Error reading response body from URL: {}", url))?;

        info!("end http read: {:?}", timer.elapsed());
        Ok(data_from_http)
    }
}

pub fn parse_services(http_data: &str) -> Result<BTreeMap<String, Vec<String>>> {
    serde_json::from_str(http_data)
        .with_context(|| "Could not parse /v1/catalog/services json data")
}

pub fn parse_service_instances(http_data: &str, service_name: &str) -> Result<Vec<CatalogService>> {
    serde_json::from_str(http_data)
        .with_context(|| format!("Could not parse /v1/catalog/service/{} json data", service_name))
}
