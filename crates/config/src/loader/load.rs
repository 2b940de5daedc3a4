//! First-success-wins property loading.
//!
//! Responsibilities:
//! - Try each candidate location in order and return the first property set
//!   that opens and parses.
//! - Resolve `resource:` references against the registered bundled
//!   resources; open everything else as a filesystem file.
//! - Fall back to an empty set with the `n/a` sentinel when every candidate
//!   fails.
//!
//! Does NOT handle:
//! - Candidate-string parsing (see candidates.rs).
//! - Decryption or overlays (see resolver/).
//!
//! Invariants:
//! - A failing candidate is logged and swallowed, never raised: a missing
//!   file must not prevent the host process from starting.
//! - Exactly one source contributes entries; files are never merged.

use std::collections::HashMap;

use tracing::{info, trace, warn, Level};

use super::candidates::{CandidateList, SourceLocation};
use super::error::LoadError;
use crate::constants::NO_SOURCE;
use crate::properties::PropertySet;

/// The outcome of a load: the property set plus the identifier of the
/// candidate it came from (`n/a` when nothing loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProperties {
    pub properties: PropertySet,
    pub source: String,
}

impl LoadedProperties {
    fn none() -> Self {
        Self {
            properties: PropertySet::empty(),
            source: NO_SOURCE.to_string(),
        }
    }
}

/// Loads the base property set from an ordered candidate list.
#[derive(Debug, Default, Clone)]
pub struct SourceLoader {
    resources: HashMap<String, String>,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundled resource under `name`, resolvable as
    /// `resource:<name>`. Contents are typically `include_str!` blobs
    /// supplied by the host.
    pub fn register_resource(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.resources.insert(name.into(), contents.into());
    }

    /// Try candidates in order and return the first successfully parsed set.
    ///
    /// Every per-candidate failure is swallowed; if all candidates fail (or
    /// the list is empty) the result is an empty set identified as `n/a`.
    pub fn load(&self, candidates: &CandidateList) -> LoadedProperties {
        for location in candidates.iter() {
            info!("trying to load properties from {location}");
            match self.try_load(location) {
                Ok(properties) => {
                    info!(
                        "loaded {} {} from {location}",
                        properties.len(),
                        if properties.len() == 1 { "property" } else { "properties" },
                    );
                    return LoadedProperties {
                        properties,
                        source: location.to_string(),
                    };
                }
                Err(error) => {
                    if tracing::enabled!(Level::TRACE) {
                        trace!("could not load {location}: {error}");
                    } else {
                        info!("could not load {location}");
                    }
                }
            }
        }
        warn!("could not read properties from any of [{candidates}]");
        LoadedProperties::none()
    }

    fn try_load(&self, location: &SourceLocation) -> Result<PropertySet, LoadError> {
        let text = match location {
            SourceLocation::Resource(name) => self
                .resources
                .get(name)
                .cloned()
                .ok_or_else(|| LoadError::ResourceNotFound { name: name.clone() })?,
            SourceLocation::Path(path) => {
                std::fs::read_to_string(path).map_err(|source| LoadError::Open {
                    location: location.to_string(),
                    source,
                })?
            }
        };
        PropertySet::parse(&text).map_err(|source| LoadError::Parse {
            location: location.to_string(),
            source,
        })
    }
}
