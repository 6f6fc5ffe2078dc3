use super::validate::ValidatedDataProxy;
use crate::version::ClientVersion;

/// Where and how a data proxy client talks to the remote engine.
///
/// Built only from a configuration that passed validation, so the host,
/// API key and version are known to be well formed.
#[derive(Clone, PartialEq, Eq)]
pub struct DataProxyEndpoint {
    host: String,
    api_key: String,
    client_version: ClientVersion,
    inline_schema_hash: String,
}

impl DataProxyEndpoint {
    #[must_use]
    pub fn new(validated: ValidatedDataProxy, inline_schema_hash: impl Into<String>) -> Self {
        let host = validated.url.host_str().unwrap_or_default();
        let host = match validated.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Self {
            host,
            api_key: validated.api_key,
            client_version: validated.client_version,
            inline_schema_hash: inline_schema_hash.into(),
        }
    }

    /// Host (and port, if any) of the data proxy.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Client version the remote engine is selected by.
    #[must_use]
    pub const fn client_version(&self) -> &ClientVersion {
        &self.client_version
    }

    #[must_use]
    pub fn inline_schema_hash(&self) -> &str {
        &self.inline_schema_hash
    }

    /// Base URL of the remote engine for this client and schema.
    ///
    /// `https://{host}/{client_version}/{inline_schema_hash}`
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "https://{}/{}/{}",
            self.host, self.client_version, self.inline_schema_hash
        )
    }

    /// Value of the `Authorization` header sent with every request.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl std::fmt::Debug for DataProxyEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProxyEndpoint")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .field("client_version", &self.client_version)
            .field("inline_schema_hash", &self.inline_schema_hash)
            .finish()
    }
}
