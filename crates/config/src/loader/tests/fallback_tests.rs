//! Candidate fallback behavior.

use crate::constants::NO_SOURCE;
use crate::loader::{CandidateList, SourceLoader};

use tempfile::TempDir;

#[test]
fn first_existing_candidate_wins() {
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.properties");
    std::fs::write(&real, "greeting=hello\ncount=3\n").unwrap();

    let missing = dir.path().join("missing.properties");
    let list = CandidateList::parse(&format!(
        "{},{}",
        missing.display(),
        real.display()
    ));

    let loaded = SourceLoader::new().load(&list);
    assert_eq!(loaded.source, real.display().to_string());
    assert_eq!(loaded.properties.get("greeting"), Some("hello"));
    assert_eq!(loaded.properties.get("count"), Some("3"));
}

#[test]
fn earlier_candidate_shadows_later_ones() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.properties");
    let second = dir.path().join("second.properties");
    std::fs::write(&first, "k=from-first\n").unwrap();
    std::fs::write(&second, "k=from-second\nextra=1\n").unwrap();

    let list = CandidateList::parse(&format!("{},{}", first.display(), second.display()));
    let loaded = SourceLoader::new().load(&list);

    // No merging across files: only the first success contributes entries.
    assert_eq!(loaded.source, first.display().to_string());
    assert_eq!(loaded.properties.get("k"), Some("from-first"));
    assert_eq!(loaded.properties.get("extra"), None);
}

#[test]
fn unparseable_candidate_is_skipped() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.properties");
    let good = dir.path().join("good.properties");
    std::fs::write(&broken, "bad=\\u12zz\n").unwrap();
    std::fs::write(&good, "k=v\n").unwrap();

    let list = CandidateList::parse(&format!("{},{}", broken.display(), good.display()));
    let loaded = SourceLoader::new().load(&list);

    assert_eq!(loaded.source, good.display().to_string());
    assert_eq!(loaded.properties.get("k"), Some("v"));
}

#[test]
fn exhausted_candidates_yield_empty_set_and_sentinel() {
    let dir = TempDir::new().unwrap();
    let list = CandidateList::parse(&format!(
        "{},{}",
        dir.path().join("nope.properties").display(),
        dir.path().join("also-nope.properties").display()
    ));

    let loaded = SourceLoader::new().load(&list);
    assert_eq!(loaded.source, NO_SOURCE);
    assert!(loaded.properties.is_empty());
}

#[test]
fn empty_candidate_list_yields_sentinel_without_attempts() {
    let list = CandidateList::parse("");
    assert!(list.is_empty());

    let loaded = SourceLoader::new().load(&list);
    assert_eq!(loaded.source, NO_SOURCE);
    assert!(loaded.properties.is_empty());
}
