//! Client configuration module.
//!
//! Two inputs shape a client at construction time:
//!
//! - [`GeneratedClientConfig`]: metadata produced by the client generator
//!   (inline datasources, client version, generator settings). It is
//!   usually loaded from JSON.
//! - [`ClientOptions`]: options passed to the constructor by the caller,
//!   currently the datasource URL overrides.
//!
//! # Invariants
//!
//! - Both inputs are immutable once the client is constructed.
//! - Datasource URLs are kept exactly as supplied; validation happens
//!   later, in the engine the URL is handed to.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Generator config key selecting the engine type.
pub const ENGINE_TYPE_KEY: &str = "engineType";

/// A configuration value that is either a literal or a reference to an
/// environment variable.
///
/// When `from_env_var` is set it takes precedence over `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvValue {
    #[serde(default)]
    pub from_env_var: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl EnvValue {
    /// A literal value.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            from_env_var: None,
            value: Some(value.into()),
        }
    }

    /// A reference to the environment variable `name`.
    #[must_use]
    pub fn from_env(name: impl Into<String>) -> Self {
        Self {
            from_env_var: Some(name.into()),
            value: None,
        }
    }
}

/// A datasource embedded in the generated client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InlineDatasource {
    pub url: EnvValue,
}

/// The generator section of the generated config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub name: String,
    /// Free-form generator settings, e.g. `engineType`.
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// Metadata produced by the client generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedClientConfig {
    /// Version of the generated client, if the generator recorded one.
    #[serde(default)]
    pub client_version: Option<String>,
    /// Hash of the inline schema. Identifies the schema to the data proxy.
    #[serde(default)]
    pub inline_schema_hash: String,
    /// Provider of the active datasource, e.g. `postgresql`.
    #[serde(default)]
    pub active_provider: String,
    /// Datasource names in declaration order. The first one is active.
    #[serde(default)]
    pub datasource_names: Vec<String>,
    #[serde(default)]
    pub inline_datasources: BTreeMap<String, InlineDatasource>,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl GeneratedClientConfig {
    /// Parse the generated config from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed or does not
    /// match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse the generated config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, and
    /// `ConfigError::Parse` if its contents are not a valid config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The engine type requested by the generator, if any.
    #[must_use]
    pub fn generator_engine_type(&self) -> Option<&str> {
        self.generator.config.get(ENGINE_TYPE_KEY).map(String::as_str)
    }

    /// Name of the active datasource.
    #[must_use]
    pub fn active_datasource_name(&self) -> Option<&str> {
        self.datasource_names.first().map(String::as_str)
    }
}

/// A datasource URL override passed to the constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatasourceOverride {
    #[serde(default)]
    pub url: Option<String>,
}

/// Options passed to the client constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientOptions {
    /// Datasource overrides keyed by datasource name.
    #[serde(default)]
    pub datasources: BTreeMap<String, DatasourceOverride>,
}

impl ClientOptions {
    /// Read client options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, and
    /// `ConfigError::Parse` if its contents are not valid options.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Override the URL of the datasource `name`.
    #[must_use]
    pub fn with_datasource_url(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.datasources.insert(
            name.into(),
            DatasourceOverride {
                url: Some(url.into()),
            },
        );
        self
    }
}

/// Error returned when the client configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting has an invalid value.
    InvalidValue { name: String, message: String },
    /// A datasource override names a datasource the client does not declare.
    UnknownDatasource { name: String, available: Vec<String> },
    /// The config file could not be read.
    Io { path: String, message: String },
    /// The config could not be parsed.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
            Self::UnknownDatasource { name, available } => {
                write!(
                    f,
                    "unknown datasource '{name}' provided to client constructor, available datasources: {}",
                    available.join(", ")
                )
            }
            Self::Io { path, message } => {
                write!(f, "failed to read config file {path}: {message}")
            }
            Self::Parse(message) => write!(f, "failed to parse client config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
