//! A data proxy client without a datasource URL cannot be constructed.

use crate::config::{ClientOptions, EnvValue, InlineDatasource};
use crate::data_proxy::DataProxyError;
use crate::e2e_tests::helpers::*;

#[test]
fn test_no_inline_datasource() {
    let err = construct_err(&generated_config(), &data_proxy_env());
    assert_eq!(err, DataProxyError::UnparseableUrl);
    assert_eq!(err.to_string(), "Could not parse URL of the datasource");
}

#[test]
fn test_env_reference_to_unset_variable() {
    let mut config = generated_config();
    config.inline_datasources.insert(
        DATASOURCE.to_string(),
        InlineDatasource {
            url: EnvValue::from_env("PROXY_URL_NOT_SET"),
        },
    );
    let err = construct_err(&config, &data_proxy_env());
    assert_eq!(err, DataProxyError::UnparseableUrl);
}

#[test]
fn test_garbage_url() {
    let config = with_inline_url(generated_config(), "this is not a url");
    let err = construct_err(&config, &data_proxy_env());
    assert_eq!(err, DataProxyError::UnparseableUrl);
}

#[test]
fn test_garbage_override() {
    let config = with_inline_url(generated_config(), &proxy_url_with_api_key());
    let options = ClientOptions::default().with_datasource_url(DATASOURCE, "::::");
    let err = crate::client::Client::new(&config, &options, &data_proxy_env()).unwrap_err();
    assert_eq!(
        err,
        crate::client::ClientError::DataProxy(DataProxyError::UnparseableUrl)
    );
}
