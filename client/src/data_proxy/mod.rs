//! Data proxy engine bootstrap.
//!
//! A data proxy client sends its queries to a remote engine instead of a
//! local one. Before the client can be built, its datasource URL and client
//! version are validated and turned into a [`DataProxyEndpoint`].
//!
//! # Pre-conditions
//! - The datasource URL has already been resolved (overrides, env vars).
//!
//! # Post-conditions
//! - On success the endpoint holds a non-empty API key and a
//!   `major.minor.patch` client version.
//!
//! # Invariants
//! - Validation is pure: the same input always yields the same result.

pub mod endpoint;
pub mod error;
pub mod validate;

pub use endpoint::DataProxyEndpoint;
pub use error::DataProxyError;
pub use validate::{DataProxyInput, ValidatedDataProxy, validate};
