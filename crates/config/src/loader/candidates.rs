//! Candidate-location parsing.
//!
//! Responsibilities:
//! - Parse the comma-separated candidate-location string into an ordered
//!   [`CandidateList`].
//! - Distinguish bundled-resource references (`resource:` prefix) from
//!   filesystem paths.
//!
//! Does NOT handle:
//! - Opening or parsing the locations (see load.rs).
//!
//! Invariants:
//! - List order defines trial precedence: the first candidate that loads
//!   wins; there is no merging across files.
//! - Each location keeps its original string for diagnostics.

use std::fmt;
use std::path::PathBuf;

use crate::constants::RESOURCE_PREFIX;

/// One place to look for the base property file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A bundled resource registered with the loader, named without its
    /// `resource:` prefix.
    Resource(String),
    /// A filesystem path.
    Path(PathBuf),
}

impl SourceLocation {
    /// Parse one candidate string into a location.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(RESOURCE_PREFIX) {
            Some(name) => Self::Resource(name.to_string()),
            None => Self::Path(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(name) => write!(f, "{RESOURCE_PREFIX}{name}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The ordered list of locations to try, derived from one comma-separated
/// configuration string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList(Vec<SourceLocation>);

impl CandidateList {
    /// Split a configuration string on commas. Entries are trimmed and empty
    /// entries dropped, so the empty string yields an empty list.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(SourceLocation::parse)
                .collect(),
        )
    }

    /// Iterate locations in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceLocation> {
        self.0.iter()
    }

    /// Whether there is nothing to try.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for location in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{location}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths_and_resources() {
        let list = CandidateList::parse("resource:application.properties,config/application.properties");
        let locations: Vec<_> = list.iter().cloned().collect();
        assert_eq!(
            locations,
            vec![
                SourceLocation::Resource("application.properties".to_string()),
                SourceLocation::Path(PathBuf::from("config/application.properties")),
            ]
        );
    }

    #[test]
    fn empty_string_yields_empty_list() {
        assert!(CandidateList::parse("").is_empty());
        assert!(CandidateList::parse(" , ,").is_empty());
    }

    #[test]
    fn entries_are_trimmed() {
        let list = CandidateList::parse(" a.properties , resource:b.properties ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "a.properties,resource:b.properties");
    }
}
