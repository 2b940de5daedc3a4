//! Host-environment access for the resolver.
//!
//! Responsibilities:
//! - Define the [`Environment`] capability the resolver queries for overlay
//!   values (environment variables and process properties).
//! - Provide [`ProcessEnv`], the real-process implementation.
//! - Maintain the process-wide mutable property store.
//! - Derive environment-variable names from property keys.
//!
//! Does NOT handle:
//! - Property-file loading (see loader/).
//! - Lookup precedence (see resolver/).
//!
//! Invariants:
//! - The capability is read-only at call time; overlay values are consulted
//!   live on every lookup, never cached.
//! - The process property store is process-wide and shared by design, like
//!   the environment itself.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Read-only-at-call-time access to the host's overlay stores.
///
/// The resolver never reads `std::env` or the property store directly; it
/// goes through this trait so tests can substitute a fake environment.
pub trait Environment: Send + Sync {
    /// Look up an environment variable by its exact name.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Look up a process property by its exact key.
    fn property(&self, key: &str) -> Option<String>;
}

/// The real process environment and process property store.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn property(&self, key: &str) -> Option<String> {
        get_property(key)
    }
}

fn store() -> &'static RwLock<HashMap<String, String>> {
    static STORE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Set a process property, returning the previous value if any.
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    store()
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .insert(key.into(), value.into())
}

/// Get a process property by its exact key.
pub fn get_property(key: &str) -> Option<String> {
    store()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .get(key)
        .cloned()
}

/// Remove a process property, returning the removed value if any.
pub fn remove_property(key: &str) -> Option<String> {
    store()
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .remove(key)
}

/// Derive the environment-variable name for a property key.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and the result is
/// upper-cased, so `propseal.password` is looked up as `PROPSEAL_PASSWORD`.
pub fn env_var_name(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_name_normalizes_keys() {
        assert_eq!(env_var_name("propseal.password"), "PROPSEAL_PASSWORD");
        assert_eq!(env_var_name("my-app.some key"), "MY_APP_SOME_KEY");
        assert_eq!(env_var_name("ALREADY_OK_9"), "ALREADY_OK_9");
        assert_eq!(env_var_name(""), "");
    }

    #[test]
    fn property_store_set_get_remove() {
        let key = "_propseal_test_store_key";
        assert_eq!(get_property(key), None);
        assert_eq!(set_property(key, "one"), None);
        assert_eq!(get_property(key).as_deref(), Some("one"));
        assert_eq!(set_property(key, "two").as_deref(), Some("one"));
        assert_eq!(remove_property(key).as_deref(), Some("two"));
        assert_eq!(get_property(key), None);
    }

    #[test]
    fn process_env_reads_property_store() {
        let key = "_propseal_test_process_env_key";
        set_property(key, "value");
        let env = ProcessEnv;
        assert_eq!(env.property(key).as_deref(), Some("value"));
        remove_property(key);
        assert_eq!(env.property(key), None);
    }
}
