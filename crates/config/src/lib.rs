//! Layered configuration resolution with opportunistic decryption.
//!
//! This crate resolves configuration values from layered sources — live
//! environment variables, live process properties, and one property file
//! picked from an ordered candidate list — and transparently decrypts values
//! stored in encrypted form under a password-based cipher. Lookups never
//! fail: a value that cannot be decrypted is served raw, and a file that
//! cannot be found degrades to an empty set, so building a
//! [`ConfigResolver`] can never prevent the host process from starting.
//!
//! ```no_run
//! use propseal_config::ConfigResolver;
//!
//! let resolver = ConfigResolver::builder()
//!     .candidates("config/application.properties")
//!     .build();
//! let timeout = resolver.get_or("service.timeout", "30");
//! ```
//!
//! # Operational note
//!
//! When no password reaches the resolver through any channel, a fixed
//! placeholder is used so construction still succeeds — but genuinely
//! encrypted values then come back as raw ciphertext rather than an error.
//! A deployment that forgets to set `propseal.password` (or the
//! `PROPSEAL_PASSWORD` variable) will silently serve ciphertext; callers
//! that require a decryptable key must validate the returned value
//! themselves.

pub mod constants;
mod encryption;
mod environment;
mod loader;
mod properties;
mod resolver;
mod source;

pub use encryption::{
    EncryptionError, EncryptorFactory, PbeEncryptorFactory, PbeTextEncryptor, TextEncryptor,
    ENCRYPTED_VALUE_PREFIX,
};
pub use environment::{
    env_var_name, get_property, remove_property, set_property, Environment, ProcessEnv,
};
pub use loader::{CandidateList, LoadError, LoadedProperties, SourceLoader, SourceLocation};
pub use properties::{ParseError, PropertySet};
pub use resolver::{ConfigResolver, ResolverBuilder};
pub use source::ConfigSource;
