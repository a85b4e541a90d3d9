//! Integration tests for Trellis
//!
//! These run the full pipeline the CLI drives: load an export from disk,
//! construct the index, checkpoint it, restore it, classify, and render.

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use trellis_core::{GraphIndex, RefFilter, classify_pages};
use trellis_render::render_outline;

/// A small but representative export: a daily page, a bar page pointing at
/// a target page, and a nested page carrying a reserved-marker ref.
fn write_sample_export(dir: &TempDir) -> PathBuf {
    let export = json!([
        {
            "uid": "09-10-2023",
            "title": "September 10th, 2023",
            "string": "nothing",
            "children": [],
        },
        {
            "uid": "A",
            "title": "Proj | SubA",
            "refs": [{"uid": "B"}],
        },
        {
            "uid": "B",
            "title": "Projects",
        },
        {
            "uid": "DNqgQM5vZ",
            "title": "Research Notes",
            "children": [
                {
                    "uid": "SbngKbqIX",
                    "string": "#todo.to_process.move",
                    "refs": [{"uid": "pUoYhPB6m"}, {"uid": "KVGudD7AP"}],
                },
            ],
        },
    ]);

    let path = dir.path().join("export.json");
    fs::write(&path, export.to_string()).unwrap();
    path
}

#[test]
fn test_end_to_end_index_and_classify() {
    let dir = TempDir::new().unwrap();
    let export = write_sample_export(&dir);

    let index = trellis_store::build_index(&export, None, &RefFilter::default()).unwrap();
    assert_eq!(index.page_count(), 4);
    assert_eq!(index.graph().node_count(), 5);

    // The reserved marker never survives construction.
    let notes = index.page("Research Notes").unwrap();
    let block = index.graph().node(notes.children[0]).unwrap();
    assert_eq!(block.direct_refs, vec!["pUoYhPB6m"]);
    assert!(notes.recursive_refs.contains("pUoYhPB6m"));

    let sets = classify_pages(&index).unwrap();
    assert!(sets.daily_pages.contains("September 10th, 2023"));
    assert!(sets.bars.contains("Proj | SubA"));
    assert!(sets.with_ref["Projects"].contains("Proj | SubA"));
    assert!(sets.other.contains("Projects"));
    assert!(sets.other.contains("Research Notes"));
}

#[test]
fn test_end_to_end_checkpoint_restore() {
    let dir = TempDir::new().unwrap();
    let export = write_sample_export(&dir);
    let dest = trellis_store::checkpoint_path(dir.path());

    let built = trellis_store::build_index(&export, Some(&dest), &RefFilter::default()).unwrap();
    assert!(dest.exists());

    let restored = trellis_store::load_checkpoint(&dest).unwrap();
    assert_eq!(built, restored);

    // The restored index classifies identically.
    assert_eq!(
        classify_pages(&built).unwrap(),
        classify_pages(&restored).unwrap()
    );
}

#[test]
fn test_end_to_end_render() {
    let dir = TempDir::new().unwrap();
    let export = write_sample_export(&dir);

    let index = trellis_store::build_index(&export, None, &RefFilter::default()).unwrap();
    let outline = render_outline(index.page_view("Research Notes").unwrap());

    assert!(outline.starts_with("Research Notes\n"));
    assert!(outline.contains("- #todo.to_process.move"));
    assert!(outline.contains("==> uid=SbngKbqIX refs=[pUoYhPB6m]"));
}

#[test]
fn test_load_failure_is_distinguishable_from_empty() {
    let dir = TempDir::new().unwrap();

    let missing = trellis_store::load_records(&dir.path().join("absent.json"));
    assert!(missing.is_err());

    let empty_path = dir.path().join("empty.json");
    fs::write(&empty_path, "[]").unwrap();
    let empty = trellis_store::load_records(&empty_path).unwrap();
    assert!(empty.is_empty());

    let index = GraphIndex::from_records(empty, &RefFilter::default()).unwrap();
    assert_eq!(index.page_count(), 0);
}
