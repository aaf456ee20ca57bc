//! Golden scenario: the letters walk-through from the driver program.
//!
//! The expected bucket layout lives in `tests/golden/letters.json` and was
//! produced by an independent model of the hash (wrapping 64-bit
//! arithmetic, Euclidean bucket index).

use std::path::PathBuf;

use serde::Deserialize;
use wordset_core::StringSet;

#[derive(Debug, Deserialize)]
struct Removal {
    item: String,
    removed: bool,
    len: usize,
}

#[derive(Debug, Deserialize)]
struct Golden {
    capacity: i64,
    insert: Vec<String>,
    present: Vec<String>,
    absent: Vec<String>,
    rendered: Vec<String>,
    removals: Vec<Removal>,
    rendered_after_removals: Vec<String>,
}

fn load_golden(filename: &str) -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn render_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn build(golden: &Golden) -> StringSet {
    let mut set = StringSet::try_new(golden.capacity).expect("golden capacity is valid");
    for item in &golden.insert {
        assert!(set.add(item.as_str()), "add({item})");
    }
    set
}

#[test]
fn letters_count_includes_duplicate() {
    let golden = load_golden("letters.json");
    let set = build(&golden);
    assert_eq!(set.len(), golden.insert.len());
    assert_eq!(set.len(), 20);
}

#[test]
fn letters_membership() {
    let golden = load_golden("letters.json");
    let set = build(&golden);
    for item in &golden.present {
        assert!(set.contains(item), "expected {item} present");
    }
    for item in &golden.absent {
        assert!(!set.contains(item), "expected {item} absent");
    }
}

#[test]
fn letters_rendering() {
    let golden = load_golden("letters.json");
    let set = build(&golden);
    assert_eq!(set.to_string(), render_lines(&golden.rendered));
}

#[test]
fn letters_removals() {
    let golden = load_golden("letters.json");
    let mut set = build(&golden);
    for removal in &golden.removals {
        assert_eq!(
            set.remove_item(&removal.item),
            removal.removed,
            "remove_item({})",
            removal.item
        );
        assert_eq!(set.len(), removal.len, "len after removing {}", removal.item);
    }
    assert!(!set.contains("e"));
    assert!(!set.contains("i"));
    assert_eq!(set.to_string(), render_lines(&golden.rendered_after_removals));
}

#[test]
fn letters_with_unique_insertion() {
    let golden = load_golden("letters.json");
    let mut set = StringSet::try_new(golden.capacity).unwrap();
    let added = golden
        .insert
        .iter()
        .filter(|item| set.add_unique(item.as_str()))
        .count();
    assert_eq!(added, 19);
    assert_eq!(set.len(), 19);
    assert!(set.to_string().contains("12\tE\n"));
}
