//! The configuration-source surface exposed to the host.
//!
//! Responsibilities:
//! - Define [`ConfigSource`], the named, priority-ordered contract a host
//!   composes into its chain of configuration sources.
//!
//! Does NOT handle:
//! - Discovery or registration mechanics; wiring a source into the host's
//!   chain is the host's job.
//!
//! Invariants:
//! - `name` and `ordinal` are fixed for the lifetime of a source.
//! - Sources with a higher ordinal shadow lower ones in the host's chain.

use std::collections::{BTreeMap, BTreeSet};

/// One named, priority-ordered source of configuration values.
pub trait ConfigSource: Send + Sync {
    /// Fixed string identity of this source.
    fn name(&self) -> &str;

    /// Position of this source in the host's ordered chain.
    fn ordinal(&self) -> i32;

    /// The enumerable key set of this source.
    fn keys(&self) -> BTreeSet<String>;

    /// Every enumerable key mapped to its effective value.
    fn entries(&self) -> BTreeMap<String, String>;

    /// The effective value for `key`, if this source has one.
    fn get(&self, key: &str) -> Option<String>;
}
