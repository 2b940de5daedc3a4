//! The layered configuration resolver.
//!
//! Responsibilities:
//! - Answer per-key lookups by consulting, in order: the environment
//!   overlay, the process-property overlay, the loaded property set, then a
//!   caller-supplied default.
//! - Apply opportunistic decryption to file-sourced values, falling back to
//!   the raw stored value when decryption fails.
//! - Expose the loaded key set and bulk entries for host composition.
//!
//! Does NOT handle:
//! - Construction (see builder.rs).
//! - Host registration mechanics.
//!
//! Invariants:
//! - The property set is frozen at construction; overlays are read live on
//!   every lookup, so environment changes after construction are observed.
//! - Overlay values are returned verbatim; decryption applies only to
//!   file-sourced values.
//! - Decryption failure never fails a lookup.

mod builder;


pub use builder::ResolverBuilder;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn, Level};

use crate::constants::{SOURCE_NAME, SOURCE_ORDINAL};
use crate::encryption::TextEncryptor;
use crate::environment::{env_var_name, Environment};
use crate::properties::PropertySet;
use crate::source::ConfigSource;

/// A layered configuration resolver with opportunistic decryption.
///
/// Built once via [`ResolverBuilder`]; afterwards it is immutable except for
/// the live overlay reads and safe for unlimited concurrent readers.
/// Independent instances (different passwords, different candidate lists)
/// do not interfere with one another.
pub struct ConfigResolver {
    pub(crate) environment: Arc<dyn Environment>,
    pub(crate) properties: PropertySet,
    pub(crate) source: String,
    pub(crate) encryptor: Box<dyn TextEncryptor>,
}

impl ConfigResolver {
    /// Start building a resolver.
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// The effective value for `key`, if any layer has one.
    ///
    /// Precedence: environment variable (under the derived name, verbatim),
    /// process property (literal key, verbatim), then the loaded file with
    /// decrypt-or-raw applied.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.environment.env_var(&env_var_name(key)) {
            return Some(value);
        }
        if let Some(value) = self.environment.property(key) {
            return Some(value);
        }
        self.properties
            .get(key)
            .map(|raw| self.decrypt_or_raw(key, raw))
    }

    /// The effective value for `key`, or `default` when every layer is
    /// absent.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get_or_else(key, || default.to_string())
    }

    /// Like [`Self::get_or`], but the default is computed only if needed.
    pub fn get_or_else(&self, key: &str, default: impl FnOnce() -> String) -> String {
        self.get(key).unwrap_or_else(default)
    }

    /// Exactly the key set of the loaded file. Overlays are point lookups,
    /// not enumerable sets, and are never included here.
    pub fn keys(&self) -> BTreeSet<String> {
        self.properties.keys().map(str::to_string).collect()
    }

    /// Every loaded key mapped through decrypt-or-raw. Overlay layers are
    /// not applied at the bulk level.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|(key, raw)| (key.to_string(), self.decrypt_or_raw(key, raw)))
            .collect()
    }

    /// Identifier of the candidate the property set was loaded from, or
    /// `n/a` when nothing loaded.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn decrypt_or_raw(&self, key: &str, raw: &str) -> String {
        match self.encryptor.decrypt(raw) {
            Ok(plaintext) => plaintext,
            Err(error) => {
                if tracing::enabled!(Level::DEBUG) {
                    debug!("could not decrypt property {key}; falling back to the raw value: {error}");
                } else {
                    warn!("could not decrypt property {key}; falling back to the raw value");
                }
                raw.to_string()
            }
        }
    }
}

impl ConfigSource for ConfigResolver {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn ordinal(&self) -> i32 {
        SOURCE_ORDINAL
    }

    fn keys(&self) -> BTreeSet<String> {
        ConfigResolver::keys(self)
    }

    fn entries(&self) -> BTreeMap<String, String> {
        ConfigResolver::entries(self)
    }

    fn get(&self, key: &str) -> Option<String> {
        ConfigResolver::get(self, key)
    }
}

impl fmt::Display for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SOURCE_NAME)
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("source", &self.source)
            .field("keys", &self.properties.len())
            .finish_non_exhaustive()
    }
}
