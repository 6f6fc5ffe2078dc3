//! Test that constructing from the same inputs always gives the same result.

use crate::e2e_tests::helpers::*;

#[test]
fn test_same_error_twice() {
    let cases = [
        generated_config(),
        with_inline_url(generated_config(), DATABASE_URL),
        with_inline_url(generated_config(), &proxy_url()),
        with_inline_url(generated_config(), &proxy_url_with_api_key()),
        {
            let mut config = with_inline_url(generated_config(), &proxy_url_with_api_key());
            config.client_version = Some("does-not-exist".to_string());
            config
        },
    ];

    for (i, config) in cases.iter().enumerate() {
        let run1 = construct_err(config, &data_proxy_env());
        let run2 = construct_err(config, &data_proxy_env());
        assert_eq!(run1, run2, "error mismatch at {i}");
        assert_eq!(run1.to_string(), run2.to_string(), "message mismatch at {i}");
    }
}

#[test]
fn test_same_client_twice() {
    let config = with_inline_url(generated_config(), &proxy_url_with_api_key());
    let env = data_proxy_env_with_version("3.4.1");

    let run1 = construct(&config, &env).expect("client constructs");
    let run2 = construct(&config, &env).expect("client constructs");
    assert_eq!(run1, run2);
}
