//! The data proxy only accepts `prisma://` datasource URLs.

use crate::config::{EnvValue, InlineDatasource};
use crate::data_proxy::DataProxyError;
use crate::e2e_tests::helpers::*;

#[test]
fn test_postgres_url_rejected() {
    let config = with_inline_url(generated_config(), DATABASE_URL);
    let err = construct_err(&config, &data_proxy_env());
    assert_eq!(err, DataProxyError::WrongProtocol);
    assert_eq!(err.to_string(), "Datasource URL should use prisma:// protocol");
}

#[test]
fn test_postgres_url_from_env_rejected() {
    let mut config = generated_config();
    config.inline_datasources.insert(
        DATASOURCE.to_string(),
        InlineDatasource {
            url: EnvValue::from_env("DATABASE_URL"),
        },
    );
    let err = construct_err(&config, &data_proxy_env());
    assert_eq!(err, DataProxyError::WrongProtocol);
}

#[test]
fn test_api_key_does_not_fix_protocol() {
    let url = format!("{DATABASE_URL}&api_key=something");
    let config = with_inline_url(generated_config(), &url);
    let err = construct_err(&config, &data_proxy_env_with_version("3.4.1"));
    assert_eq!(err, DataProxyError::WrongProtocol);
}
