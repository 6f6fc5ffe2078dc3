//! Environment variable access.
//!
//! Every environment lookup made during client construction goes through
//! [`EnvSource`], so resolution and validation stay free of global state.
//!
//! # Invariants
//!
//! - An empty value is reported the same as an unset variable.

use std::collections::HashMap;

/// Environment variable selecting the engine type.
pub const ENGINE_TYPE_ENV_VAR: &str = "PRISMA_CLIENT_ENGINE_TYPE";

/// Environment variable supplying the client version for the data proxy.
pub const DATA_PROXY_CLIENT_VERSION_ENV_VAR: &str = "PRISMA_CLIENT_DATA_PROXY_CLIENT_VERSION";

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Look up a raw variable. `None` if unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Look up a variable, treating an empty value as unset.
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
