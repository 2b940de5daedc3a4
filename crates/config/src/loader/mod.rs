//! Property-file discovery and loading.
//!
//! Responsibilities:
//! - Parse the comma-separated candidate-location string.
//! - Load the base [`crate::properties::PropertySet`] from the first
//!   candidate that opens and parses.
//!
//! Does NOT handle:
//! - Lookup precedence or decryption (see resolver/).
//!
//! Invariants:
//! - Trial order is list order; first success wins.
//! - Loading never fails outward: exhaustion degrades to an empty set.

mod candidates;
mod error;
mod load;

#[cfg(test)]
mod tests;

pub use candidates::{CandidateList, SourceLocation};
pub use error::LoadError;
pub use load::{LoadedProperties, SourceLoader};
