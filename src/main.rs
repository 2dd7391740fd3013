use std::io::Write;
use std::{io, process};

use clap::Parser;
use dotenv::dotenv;
use log::*;

use check_consul_service::catalog::CatalogClient;
use check_consul_service::threshold::{self, Status, Thresholds};
use check_consul_service::utility;
use check_consul_service::Opts;

fn main() {
    dotenv().ok();
    env_logger::init();
    let options = Opts::parse();

    let (status, message) = perform_check(&options);

    // Nagios reads exactly one line from stdout, without a trailing newline.
    print!("CONSUL-SERVICE {}: {}", status, message);
    io::stdout().flush().ok();
    process::exit(status.exit_code());
}

/// Run one evaluation pass and return the severity plus the status message.
///
/// Every failure, configuration and catalog alike, maps to [Status::Unknown]
/// with the error text as the message; process termination is left to main.
fn perform_check(options: &Opts) -> (Status, String) {
    let config = utility::build_config(options);

    let thresholds = Thresholds {
        warning: config.warning,
        critical: config.critical,
    };
    if let Err(error) = thresholds.validate() {
        return (Status::Unknown, error.to_string());
    }

    let client = match CatalogClient::new(&config) {
        Ok(client) => client,
        Err(error) => return (Status::Unknown, format!("{:#}", error)),
    };

    let service_names: Vec<String> = if config.services.is_empty() {
        info!("no services set: checking all catalog services");
        match client.service_names() {
            Ok(services) => services.into_keys().collect(),
            Err(error) => return (Status::Unknown, format!("{:#}", error)),
        }
    } else {
        config.services.clone()
    };

    threshold::evaluate(&service_names, &thresholds, |service_name| {
        client
            .service_instances(service_name)
            .map(|instances| instances.len())
    })
}
