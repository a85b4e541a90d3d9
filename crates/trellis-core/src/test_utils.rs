//! Shared fixtures for core tests

use serde_json::{Value, json};

/// Minimal page record.
pub fn page(uid: &str, title: &str) -> Value {
    json!({
        "uid": uid,
        "title": title,
        "string": "nothing",
        "create-time": 1694303705806_i64,
        "edit-time": 1694303705806_i64,
    })
}

/// A page with one reserved-marker ref and one child block, shaped like a
/// real export record (extra metadata keys included).
pub fn sample_page() -> Value {
    json!({
        "title": "Sample Page",
        "string": "This is a sample page",
        "uid": "1234567890",
        "create-time": 1694303705806_i64,
        "edit-time": 1694303705807_i64,
        ":create/user": {":user/uid": "XRlk7Tpv53UEosC4qi7bcFHhVPx1"},
        "refs": [
            {"uid": "ref1"},
            {"uid": "KVGudD7AP"},
            {"uid": "ref2"},
        ],
        "children": [
            {
                "string": "This is a child block",
                "uid": "child_uid",
                "create-time": 1694303705808_i64,
                "edit-time": 1694303705809_i64,
                "refs": [],
            }
        ],
    })
}

/// Three-level page: root ref `a`, block ref `b`, nested block refs
/// `c` and `a`.
pub fn deep_tree_page() -> Value {
    json!({
        "uid": "root",
        "title": "Deep Page",
        "refs": [{"uid": "a"}],
        "children": [
            {
                "uid": "block1",
                "string": "first block",
                "refs": [{"uid": "b"}],
                "children": [
                    {
                        "uid": "block2",
                        "string": "nested block",
                        "refs": [{"uid": "c"}, {"uid": "a"}],
                    }
                ],
            },
            {
                "uid": "block3",
                "string": "second block",
            }
        ],
    })
}

/// Two records sharing the title "Page 1" (different uids) plus one
/// distinct page.
pub fn duplicate_title_export() -> Vec<Value> {
    vec![
        page("first-uid", "Page 1"),
        page("second-uid", "Page 1"),
        page("page2", "Page 2"),
    ]
}

/// One page per classifier category, plus the target page that the
/// bar-title's first ref points at.
pub fn classification_export() -> Vec<Value> {
    vec![
        json!({
            "uid": "09-10-2023",
            "title": "September 10th, 2023",
            "string": "nothing",
            "children": [],
        }),
        json!({
            "uid": "A",
            "title": "Proj | SubA",
            "string": "nothing",
            "refs": [{"uid": "B"}],
        }),
        page("B", "Projects"),
        page("C", "Area | Solo"),
        page("D", "Area/Sub"),
        page("E", "Plain Page"),
    ]
}
