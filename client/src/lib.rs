#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
// Life of a client construction:
// 1. Generated config comes in (inline datasources, client version, generator config)
// 2. Resolve the engine type (env override, then generator config)
// 3. For the local engine:
//     - Resolve the datasource URL if one is declared
//     - Hand off to the native engine
//    For the data proxy:
//     - Resolve the datasource URL
//     - Validate URL, protocol, API key and client version
//     - Derive the remote endpoint
//
// No step performs I/O. Environment lookups go through `EnvSource`.

pub mod client;
pub mod config;
pub mod data_proxy;
pub mod datasource;
pub mod engine_type;
pub mod env;
pub mod version;

#[cfg(test)]
mod e2e_tests;

pub use client::{Client, ClientError, Engine, LocalEngine};
pub use config::{ClientOptions, ConfigError, GeneratedClientConfig};
pub use data_proxy::{DataProxyEndpoint, DataProxyError};
pub use engine_type::EngineType;
pub use env::{EnvSource, ProcessEnv};
pub use version::ClientVersion;
