//! Error types for source loading.
//!
//! Responsibilities:
//! - Describe why a single candidate location failed to load.
//!
//! Does NOT handle:
//! - Recovery: a failed candidate is never fatal; the loader logs it and
//!   tries the next one (see load.rs).
//!
//! Invariants:
//! - Variants carry the failing location for diagnostics.

use thiserror::Error;

use crate::properties::ParseError;

/// Failure to load one candidate location.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no bundled resource registered as '{name}'")]
    ResourceNotFound { name: String },

    #[error("could not open {location}: {source}")]
    Open {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },
}
