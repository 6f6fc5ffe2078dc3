//! Client construction.
//!
//! # Pre-conditions
//! - The generated config comes from the client generator unmodified.
//!
//! # Post-conditions
//! - A constructed `Client` always has a fully configured engine: a data
//!   proxy client has passed every proxy check.
//! - A failed construction leaves nothing behind.

use crate::config::{ClientOptions, ConfigError, GeneratedClientConfig};
use crate::data_proxy::{self, DataProxyEndpoint, DataProxyError, DataProxyInput};
use crate::datasource;
use crate::engine_type::EngineType;
use crate::env::EnvSource;

/// Error returned when a client cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The configuration itself is unusable.
    Config(ConfigError),
    /// The configuration does not satisfy the data proxy.
    DataProxy(DataProxyError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::DataProxy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::DataProxy(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ClientError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DataProxyError> for ClientError {
    fn from(e: DataProxyError) -> Self {
        Self::DataProxy(e)
    }
}

/// A native engine running next to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEngine {
    /// `Library` or `Binary`.
    pub engine_type: EngineType,
    /// Resolved URL of the active datasource, if any.
    pub datasource_url: Option<String>,
    pub active_provider: String,
}

/// The engine a constructed client runs its queries through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    Local(LocalEngine),
    DataProxy(DataProxyEndpoint),
}

impl Engine {
    #[must_use]
    pub const fn engine_type(&self) -> EngineType {
        match self {
            Self::Local(local) => local.engine_type,
            Self::DataProxy(_) => EngineType::DataProxy,
        }
    }
}

/// A constructed database client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    engine: Engine,
    datasource_name: Option<String>,
}

impl Client {
    /// Construct a client.
    ///
    /// Picks the engine type, resolves the active datasource URL and, for
    /// the data proxy, validates the URL and client version. Nothing here
    /// touches the network.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the engine type or a datasource
    /// override is invalid, and `ClientError::DataProxy` if a data proxy
    /// client fails one of its preconditions.
    pub fn new(
        config: &GeneratedClientConfig,
        options: &ClientOptions,
        env: &impl EnvSource,
    ) -> Result<Self, ClientError> {
        let engine_type = EngineType::resolve(config, env)?;
        let datasource = datasource::resolve(config, options, env)?;

        tracing::debug!(engine_type = %engine_type, "constructing client");

        let engine = if engine_type.is_local() {
            Engine::Local(LocalEngine {
                engine_type,
                datasource_url: datasource.url,
                active_provider: config.active_provider.clone(),
            })
        } else {
            let input = DataProxyInput {
                url: datasource.url.as_deref(),
                client_version: config.client_version.as_deref(),
            };
            let validated = data_proxy::validate(input, env).inspect_err(|e| {
                tracing::warn!(datasource = ?datasource.name, "data proxy rejected: {e}");
            })?;
            let endpoint = DataProxyEndpoint::new(validated, config.inline_schema_hash.clone());
            tracing::info!(
                host = endpoint.host(),
                client_version = %endpoint.client_version(),
                "using data proxy"
            );
            Engine::DataProxy(endpoint)
        };

        Ok(Self {
            engine,
            datasource_name: datasource.name,
        })
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub const fn engine_type(&self) -> EngineType {
        self.engine.engine_type()
    }

    /// Name of the active datasource, if the client declares one.
    #[must_use]
    pub fn datasource_name(&self) -> Option<&str> {
        self.datasource_name.as_deref()
    }
}
