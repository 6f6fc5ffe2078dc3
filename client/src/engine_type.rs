//! Engine type selection.

use std::fmt;
use std::str::FromStr;

use crate::config::{ConfigError, GeneratedClientConfig};
use crate::env::{ENGINE_TYPE_ENV_VAR, EnvSource};

/// The engine a client runs its queries through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineType {
    /// Native engine loaded as a library.
    #[default]
    Library,
    /// Native engine running as a child process.
    Binary,
    /// Remote data proxy.
    DataProxy,
}

impl EngineType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Binary => "binary",
            Self::DataProxy => "dataproxy",
        }
    }

    /// Whether queries run on a local native engine.
    #[must_use]
    pub const fn is_local(self) -> bool {
        !matches!(self, Self::DataProxy)
    }

    /// Resolve the engine type for a client.
    ///
    /// `PRISMA_CLIENT_ENGINE_TYPE` wins over the generator's `engineType`.
    /// Without either, the library engine is used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the selected value is not a
    /// known engine type.
    pub fn resolve(
        config: &GeneratedClientConfig,
        env: &impl EnvSource,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = env.var(ENGINE_TYPE_ENV_VAR) {
            return value.parse().map_err(|()| ConfigError::InvalidValue {
                name: ENGINE_TYPE_ENV_VAR.to_string(),
                message: unknown_engine_type(&value),
            });
        }

        match config.generator_engine_type() {
            Some(value) if !value.is_empty() => {
                value.parse().map_err(|()| ConfigError::InvalidValue {
                    name: crate::config::ENGINE_TYPE_KEY.to_string(),
                    message: unknown_engine_type(value),
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

fn unknown_engine_type(value: &str) -> String {
    format!("'{value}' is not one of library, binary, dataproxy")
}

impl FromStr for EngineType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "library" => Ok(Self::Library),
            "binary" => Ok(Self::Binary),
            "dataproxy" => Ok(Self::DataProxy),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
