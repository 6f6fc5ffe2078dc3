#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code to prevent panics from bad config.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
//! Validate a generated client config against the current environment.
//!
//! Usage: `client-bootstrap <generated-config.json> [client-options.json]`
//!
//! Exits with status 1 and the error message if the client could not be
//! constructed.

use std::path::PathBuf;

use client::{Client, ClientOptions, Engine, GeneratedClientConfig, ProcessEnv};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(config_path) = args.next() else {
        eprintln!("usage: client-bootstrap <generated-config.json> [client-options.json]");
        std::process::exit(2);
    };
    let options_path = args.next();

    let config = match GeneratedClientConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load generated config: {e}");
            std::process::exit(1);
        }
    };

    let options = match options_path {
        Some(path) => match ClientOptions::from_file(&path) {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("Failed to load client options: {e}");
                std::process::exit(1);
            }
        },
        None => ClientOptions::default(),
    };

    match Client::new(&config, &options, &ProcessEnv) {
        Ok(client) => match client.engine() {
            Engine::Local(local) => {
                tracing::info!(
                    "Client ready: engine={}, datasource={}",
                    local.engine_type,
                    client.datasource_name().unwrap_or("<none>")
                );
            }
            Engine::DataProxy(endpoint) => {
                tracing::info!("Client ready: data proxy at {}", endpoint.base_url());
            }
        },
        Err(e) => {
            tracing::error!("Failed to construct client: {e}");
            std::process::exit(1);
        }
    }
}
