//! Centralized constants for the propseal resolver.
//!
//! This module contains the setting keys, defaults, and ordinals used across
//! the crate to avoid magic string duplication.

// =============================================================================
// Settings consumed by the resolver itself
// =============================================================================

/// Setting holding the encryption password.
pub const PASSWORD_SETTING: &str = "propseal.password";

/// Alias for [`PASSWORD_SETTING`], kept for deployments that configure a
/// "key" rather than a "password".
pub const KEY_SETTING: &str = "propseal.key";

/// Setting holding the comma-separated candidate-location list.
pub const LOCATIONS_SETTING: &str = "propseal.properties";

// =============================================================================
// Defaults
// =============================================================================

/// Candidate locations tried when [`LOCATIONS_SETTING`] is unset: a bundled
/// resource first, then a conventional filesystem path.
pub const DEFAULT_LOCATIONS: &str =
    "resource:application.properties,config/application.properties";

/// Placeholder password used when no password is supplied through any
/// channel.
///
/// It is not meant to encrypt anything; it exists so that building a resolver
/// never fails. Decrypting real ciphertext with it fails, and the resolver
/// then serves the raw stored value. A deployment that forgets to set
/// [`PASSWORD_SETTING`] therefore sees ciphertext, not an error.
pub const DEFAULT_PASSWORD: &str = " ";

// =============================================================================
// Source identity & locations
// =============================================================================

/// Fixed name this source reports to the host's composition logic.
pub const SOURCE_NAME: &str = "propseal";

/// Prefix marking a candidate location as a bundled resource rather than a
/// filesystem path.
pub const RESOURCE_PREFIX: &str = "resource:";

/// Source identifier reported when no candidate location could be loaded.
pub const NO_SOURCE: &str = "n/a";

// =============================================================================
// Composition ordinals
// =============================================================================

/// Ordinal of a generic application-level source in the host's chain.
pub const ORDINAL_APPLICATION: i32 = 250;

/// Ordinal of the host's environment-based source.
pub const ORDINAL_ENVIRONMENT: i32 = 300;

/// Ordinal of this source: above application-level properties, below the
/// environment source.
pub const SOURCE_ORDINAL: i32 = 270;
