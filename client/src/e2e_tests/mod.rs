//! End-to-end tests at the client construction level.
//!
//! Each test file covers a specific scenario, building a client from a
//! generated config and an environment the way a generated client would.

#![cfg(test)]

mod helpers;

mod test_determinism;
mod test_missing_api_key;
mod test_missing_datasource;
mod test_wrong_protocol;
