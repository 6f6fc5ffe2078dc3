//! Preconditions for connecting through the data proxy.
//!
//! The checks run in a fixed order and stop at the first failure:
//!
//! 1. the datasource URL is present and parses
//! 2. the URL uses the `prisma://` scheme
//! 3. the URL carries a non-empty `api_key` query parameter
//! 4. a client version is supplied by the config or the environment
//! 5. the client version is `major.minor.patch`
//!
//! No check touches the network or the filesystem.

use url::Url;

use super::DataProxyError;
use crate::env::{DATA_PROXY_CLIENT_VERSION_ENV_VAR, EnvSource};
use crate::version::ClientVersion;

/// URL scheme of the data proxy.
pub const DATA_PROXY_SCHEME: &str = "prisma";

/// Query parameter carrying the data proxy API key.
pub const API_KEY_PARAM: &str = "api_key";

/// The values a data proxy client is configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataProxyInput<'a> {
    /// Resolved datasource URL.
    pub url: Option<&'a str>,
    /// Client version from the generated config.
    pub client_version: Option<&'a str>,
}

/// A configuration that passed every check.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedDataProxy {
    pub url: Url,
    pub api_key: String,
    pub client_version: ClientVersion,
}

impl std::fmt::Debug for ValidatedDataProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedDataProxy")
            .field("host", &self.url.host_str())
            .field("api_key", &"<redacted>")
            .field("client_version", &self.client_version)
            .finish()
    }
}

/// Run every check against `input`.
///
/// The client version from `input` wins over
/// `PRISMA_CLIENT_DATA_PROXY_CLIENT_VERSION`. Empty values count as unset.
///
/// # Errors
///
/// Returns the `DataProxyError` of the first failing check.
pub fn validate(
    input: DataProxyInput<'_>,
    env: &impl EnvSource,
) -> Result<ValidatedDataProxy, DataProxyError> {
    let url = parse_url(input.url)?;
    check_protocol(&url)?;
    let api_key = extract_api_key(&url)?;
    let raw_version = client_version(input.client_version, env)?;
    let client_version = ClientVersion::parse(&raw_version)?;

    Ok(ValidatedDataProxy {
        url,
        api_key,
        client_version,
    })
}

fn parse_url(url: Option<&str>) -> Result<Url, DataProxyError> {
    let url = url.ok_or(DataProxyError::UnparseableUrl)?;
    Url::parse(url).map_err(|_| DataProxyError::UnparseableUrl)
}

fn check_protocol(url: &Url) -> Result<(), DataProxyError> {
    if url.scheme() == DATA_PROXY_SCHEME {
        Ok(())
    } else {
        Err(DataProxyError::WrongProtocol)
    }
}

fn extract_api_key(url: &Url) -> Result<String, DataProxyError> {
    url.query_pairs()
        .find(|(key, _)| key == API_KEY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(DataProxyError::MissingApiKey)
}

fn client_version(
    configured: Option<&str>,
    env: &impl EnvSource,
) -> Result<String, DataProxyError> {
    configured
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| env.var(DATA_PROXY_CLIENT_VERSION_ENV_VAR))
        .ok_or(DataProxyError::MissingVersion)
}
