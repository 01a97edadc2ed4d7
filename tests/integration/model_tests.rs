use std::collections::HashSet;

use arbor_model::*;

fn entry(content: &[u8], name: &str, file_type: FileType, mode: u32) -> TreeEntry {
    TreeEntry::new(
        Hash::of(file_type.entry_type(), content),
        PathComponent::new(name).unwrap(),
        file_type,
        OwnerPermissions::from_mode(mode),
    )
}

fn readme() -> TreeEntry {
    entry(b"H1", "readme.txt", FileType::Regular, 0o644)
}

// === Scenario 1: identical entries ===
#[test]
fn test_identical_entries_equal() {
    let a = readme();
    let b = readme();
    assert!(a == b);
    assert!(!(a != b));
}

// === Scenario 2: names differ only in case ===
#[test]
fn test_name_case_breaks_equality() {
    let a = readme();
    let c = entry(b"H1", "README.txt", FileType::Regular, 0o644);
    assert!(!(a == c));
    assert!(a != c);
}

// === Scenario 3: owner permissions differ ===
#[test]
fn test_permissions_break_equality() {
    let a = readme();
    let d = entry(b"H1", "readme.txt", FileType::Regular, 0o755);
    assert!(!(a == d));
}

// === Scenario 4: rendering is pure ===
#[test]
fn test_render_tree_twice() {
    assert_eq!(TreeEntryType::Tree.to_string(), "TREE");
    assert_eq!(TreeEntryType::Tree.to_string(), TreeEntryType::Tree.to_string());
    assert_eq!(TreeEntryType::Blob.to_string(), "BLOB");
}

// === Scenario 5: corrupt tag on load ===
#[test]
fn test_corrupt_tag_rendered_not_hidden() {
    let raw = RawTreeEntryType::new(2);
    let text = raw.to_string();
    assert!(text.contains('2'));
    assert_ne!(text, "TREE");
    assert_ne!(text, "BLOB");

    let err = TreeEntryType::from_raw(raw).unwrap_err();
    assert!(err.to_string().contains("TreeEntryType::2"));

    let err = serde_json::from_str::<TreeEntryType>("2").unwrap_err();
    assert!(err.to_string().contains("TreeEntryType::2"));
}

#[test]
fn test_entries_usable_as_set_keys() {
    let mut seen = HashSet::new();
    assert!(seen.insert(readme()));
    assert!(!seen.insert(readme()));
    assert!(seen.insert(readme().with_file_type(FileType::Executable)));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_entry_serde_roundtrip_preserves_equality() {
    let a = readme();
    let json = serde_json::to_string(&a).unwrap();
    let b: TreeEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_entry_deserialization_validates_name() {
    let mut json = serde_json::to_value(readme()).unwrap();
    json["name"] = serde_json::Value::String("docs/readme.txt".into());
    let err = serde_json::from_value::<TreeEntry>(json).unwrap_err();
    assert!(err.to_string().contains("path separator"), "{err}");
}

#[test]
fn test_snapshot_rebuilt_from_prior_tree() {
    let src = entry(b"src-tree", "src", FileType::Directory, 0o755);
    let run = entry(b"#!/bin/sh", "run.sh", FileType::Executable, 0o755);
    let v1 = Tree::new(vec![readme(), src.clone(), run.clone()]).unwrap();

    let edited = readme().with_hash(Hash::of(TreeEntryType::Blob, b"H2"));
    let v2 = v1.with_entry(edited.clone()).without_entry("run.sh");

    // unchanged entries short-circuit on equality
    let unchanged: Vec<&str> = v1
        .iter()
        .filter(|e| v2.get(e.name().as_str()) == Some(*e))
        .map(|e| e.name().as_str())
        .collect();
    assert_eq!(unchanged, ["src"]);

    assert_eq!(v2.get("readme.txt"), Some(&edited));
    assert!(v2.get("run.sh").is_none());
    assert_eq!(v1.get("run.sh"), Some(&run));
    assert!(v2.get("src").unwrap().is_tree());
}

#[test]
fn test_entries_shared_across_threads() {
    let tree = std::sync::Arc::new(
        Tree::new(vec![readme(), entry(b"x", "x", FileType::Symlink, 0o777)]).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = tree.clone();
            std::thread::spawn(move || tree.get("readme.txt") == Some(&readme()))
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
