//! A `prisma://` URL must carry an API key.

use crate::data_proxy::DataProxyError;
use crate::e2e_tests::helpers::*;

#[test]
fn test_proxy_url_without_api_key() {
    let config = with_inline_url(generated_config(), &proxy_url());
    let err = construct_err(&config, &data_proxy_env());
    assert_eq!(err, DataProxyError::MissingApiKey);
    assert_eq!(err.to_string(), "No valid API key found in the datasource URL");
}

#[test]
fn test_proxy_url_with_empty_api_key() {
    let url = format!("{}&api_key=", proxy_url());
    let config = with_inline_url(generated_config(), &url);
    let err = construct_err(&config, &data_proxy_env_with_version("3.4.1"));
    assert_eq!(err, DataProxyError::MissingApiKey);
}
