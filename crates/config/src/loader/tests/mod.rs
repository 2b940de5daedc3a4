//! Tests for candidate-location loading.
//!
//! Responsibilities:
//! - Test first-success-wins fallback across candidates.
//! - Test bundled-resource resolution and the exhaustion sentinel.
//!
//! Invariants:
//! - Filesystem fixtures live in `tempfile` directories and are cleaned up
//!   automatically.

mod fallback_tests;
mod resource_tests;
