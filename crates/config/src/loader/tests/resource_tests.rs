//! Bundled-resource resolution.

use crate::constants::NO_SOURCE;
use crate::loader::{CandidateList, SourceLoader};

use tempfile::TempDir;

#[test]
fn registered_resource_is_loaded() {
    let mut loader = SourceLoader::new();
    loader.register_resource("application.properties", "name=bundled\n");

    let loaded = loader.load(&CandidateList::parse("resource:application.properties"));
    assert_eq!(loaded.source, "resource:application.properties");
    assert_eq!(loaded.properties.get("name"), Some("bundled"));
}

#[test]
fn unregistered_resource_falls_through_to_next_candidate() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("application.properties");
    std::fs::write(&file, "name=on-disk\n").unwrap();

    let loader = SourceLoader::new();
    let list = CandidateList::parse(&format!(
        "resource:application.properties,{}",
        file.display()
    ));

    let loaded = loader.load(&list);
    assert_eq!(loaded.source, file.display().to_string());
    assert_eq!(loaded.properties.get("name"), Some("on-disk"));
}

#[test]
fn resource_takes_precedence_over_file_when_listed_first() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("application.properties");
    std::fs::write(&file, "name=on-disk\n").unwrap();

    let mut loader = SourceLoader::new();
    loader.register_resource("application.properties", "name=bundled\n");

    let list = CandidateList::parse(&format!(
        "resource:application.properties,{}",
        file.display()
    ));
    let loaded = loader.load(&list);
    assert_eq!(loaded.properties.get("name"), Some("bundled"));
}

#[test]
fn unregistered_resource_alone_yields_sentinel() {
    let loaded =
        SourceLoader::new().load(&CandidateList::parse("resource:nowhere.properties"));
    assert_eq!(loaded.source, NO_SOURCE);
    assert!(loaded.properties.is_empty());
}
