use crate::env::DATA_PROXY_CLIENT_VERSION_ENV_VAR;

/// Error returned when a client cannot be configured for the data proxy.
///
/// The variants are listed in the order the checks run. All of them are
/// terminal: the same configuration always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataProxyError {
    /// The datasource URL is missing or is not a URL.
    UnparseableUrl,
    /// The datasource URL does not use the `prisma://` scheme.
    WrongProtocol,
    /// The datasource URL has no non-empty `api_key` query parameter.
    MissingApiKey,
    /// Neither the config nor the environment supplies a client version.
    MissingVersion,
    /// The client version is not `major.minor.patch`.
    InvalidVersionFormat,
}

impl std::fmt::Display for DataProxyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparseableUrl => write!(f, "Could not parse URL of the datasource"),
            Self::WrongProtocol => write!(f, "Datasource URL should use prisma:// protocol"),
            Self::MissingApiKey => write!(f, "No valid API key found in the datasource URL"),
            Self::MissingVersion => write!(
                f,
                "clientVersion or `{DATA_PROXY_CLIENT_VERSION_ENV_VAR}` env var needs to be set with a `major.minor.patch` version."
            ),
            Self::InvalidVersionFormat => {
                write!(f, "Only `major.minor.patch` versions are supported.")
            }
        }
    }
}

impl std::error::Error for DataProxyError {}
