//! Resolver construction.
//!
//! Responsibilities:
//! - Resolve the password through its fallback chain (explicit override,
//!   `propseal.password` setting, `propseal.key` alias, default-password
//!   placeholder).
//! - Resolve the candidate-location string and load the base property set.
//! - Build the encryptor through the configured factory.
//!
//! Does NOT handle:
//! - Lookup precedence (see mod.rs).
//! - Cipher mechanics (see encryption.rs).
//!
//! Invariants:
//! - `build()` never fails: a missing password degrades to the placeholder,
//!   missing files degrade to an empty set. This component must never
//!   prevent the host process from starting.
//! - Own settings are resolved against the injected environment only (env
//!   var form first, then process property), never through the loaded file.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::info;

use super::ConfigResolver;
use crate::constants::{
    DEFAULT_LOCATIONS, DEFAULT_PASSWORD, KEY_SETTING, LOCATIONS_SETTING, PASSWORD_SETTING,
    SOURCE_NAME,
};
use crate::encryption::{EncryptorFactory, PbeEncryptorFactory};
use crate::environment::{env_var_name, Environment, ProcessEnv};
use crate::loader::{CandidateList, SourceLoader};

/// Builder for [`ConfigResolver`].
///
/// Every step of construction is overridable by composition: the environment
/// capability, the password (or just its default), the encryptor factory,
/// the candidate list, and the bundled resources the loader can resolve.
pub struct ResolverBuilder {
    environment: Arc<dyn Environment>,
    password: Option<SecretString>,
    default_password: SecretString,
    encryptor_factory: Box<dyn EncryptorFactory>,
    candidates: Option<String>,
    loader: SourceLoader,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            environment: Arc::new(ProcessEnv),
            password: None,
            default_password: SecretString::new(DEFAULT_PASSWORD.to_string().into()),
            encryptor_factory: Box::new(PbeEncryptorFactory),
            candidates: None,
            loader: SourceLoader::new(),
        }
    }

    /// Substitute the environment capability (primarily for testing).
    pub fn environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Set the password explicitly, bypassing the settings chain.
    pub fn password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Replace the placeholder used when no channel supplies a password.
    ///
    /// The built-in placeholder is a single space: construction succeeds,
    /// but genuinely encrypted values fail to decrypt and are served raw.
    /// See [`crate::constants::DEFAULT_PASSWORD`].
    pub fn default_password(mut self, password: SecretString) -> Self {
        self.default_password = password;
        self
    }

    /// Replace the encryptor construction strategy.
    pub fn encryptor_factory(mut self, factory: Box<dyn EncryptorFactory>) -> Self {
        self.encryptor_factory = factory;
        self
    }

    /// Set the comma-separated candidate-location string explicitly,
    /// bypassing the `propseal.properties` setting.
    pub fn candidates(mut self, candidates: impl Into<String>) -> Self {
        self.candidates = Some(candidates.into());
        self
    }

    /// Register a bundled resource resolvable as `resource:<name>`.
    pub fn resource(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.loader.register_resource(name, contents);
        self
    }

    /// Resolve one of the resolver's own settings: derived env var first,
    /// then the literal process property. The loaded file is deliberately
    /// not consulted; settings are not resolved recursively.
    fn setting(&self, key: &str) -> Option<String> {
        self.environment
            .env_var(&env_var_name(key))
            .or_else(|| self.environment.property(key))
    }

    fn resolve_password(&mut self) -> SecretString {
        if let Some(password) = self.password.take() {
            return password;
        }
        self.setting(PASSWORD_SETTING)
            .or_else(|| self.setting(KEY_SETTING))
            .map(|p| SecretString::new(p.into()))
            .unwrap_or_else(|| self.default_password.clone())
    }

    fn resolve_candidates(&self) -> CandidateList {
        let raw = self
            .candidates
            .clone()
            .or_else(|| self.setting(LOCATIONS_SETTING))
            .unwrap_or_else(|| DEFAULT_LOCATIONS.to_string());
        CandidateList::parse(&raw)
    }

    /// Build the resolver. Infallible: every failure along the way degrades
    /// to a best-effort value.
    pub fn build(mut self) -> ConfigResolver {
        info!("initializing {SOURCE_NAME} configuration source");
        let password = self.resolve_password();
        let candidates = self.resolve_candidates();
        let loaded = self.loader.load(&candidates);
        let encryptor = self.encryptor_factory.create(password);

        ConfigResolver {
            environment: self.environment,
            properties: loaded.properties,
            source: loaded.source,
            encryptor,
        }
    }
}
