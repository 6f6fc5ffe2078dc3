//! Datasource URL resolution.
//!
//! # Pre-conditions
//! - Override keys must name datasources declared by the generated client.
//!
//! # Post-conditions
//! - The resolved URL comes from, in order: the constructor override, the
//!   environment variable referenced by the inline datasource, the inline
//!   literal value.
//! - An unset or empty source resolves to no URL rather than an error.

use crate::config::{ClientOptions, ConfigError, EnvValue, GeneratedClientConfig};
use crate::env::EnvSource;

/// The URL of the active datasource, after overrides and env lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDatasource {
    /// Datasource name, if the client declares one.
    pub name: Option<String>,
    /// Resolved URL. `None` when no source supplied a value.
    pub url: Option<String>,
}

/// Reject overrides for datasources the client does not declare.
///
/// # Errors
///
/// Returns `ConfigError::UnknownDatasource` for the first unknown key.
pub fn validate_overrides(
    config: &GeneratedClientConfig,
    options: &ClientOptions,
) -> Result<(), ConfigError> {
    match options
        .datasources
        .keys()
        .find(|name| !config.datasource_names.contains(name))
    {
        Some(name) => Err(ConfigError::UnknownDatasource {
            name: name.clone(),
            available: config.datasource_names.clone(),
        }),
        None => Ok(()),
    }
}

/// Resolve the URL of the active datasource.
///
/// # Errors
///
/// Returns `ConfigError::UnknownDatasource` if an override names an
/// undeclared datasource.
pub fn resolve(
    config: &GeneratedClientConfig,
    options: &ClientOptions,
    env: &impl EnvSource,
) -> Result<ResolvedDatasource, ConfigError> {
    validate_overrides(config, options)?;

    let Some(name) = config.active_datasource_name() else {
        tracing::debug!("client declares no datasource");
        return Ok(ResolvedDatasource {
            name: None,
            url: None,
        });
    };

    let overridden = options
        .datasources
        .get(name)
        .and_then(|o| o.url.clone())
        .filter(|url| !url.is_empty());

    let url = overridden.or_else(|| {
        config
            .inline_datasources
            .get(name)
            .and_then(|ds| resolve_env_value(&ds.url, env))
    });

    tracing::debug!(datasource = name, has_url = url.is_some(), "resolved datasource");

    Ok(ResolvedDatasource {
        name: Some(name.to_string()),
        url,
    })
}

/// Resolve an [`EnvValue`] against the environment.
pub fn resolve_env_value(value: &EnvValue, env: &impl EnvSource) -> Option<String> {
    match &value.from_env_var {
        Some(var) => env.var(var),
        None => value.value.clone().filter(|v| !v.is_empty()),
    }
}
