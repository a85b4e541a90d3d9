//! Capability trait for anything tree-shaped
//!
//! Implemented by both the raw deserialized form (`&serde_json::Value`)
//! and the constructed arena view ([`NodeView`]), so consumers like the
//! outline renderer are written once against the trait.

use serde_json::Value;

use crate::graph::NodeView;

/// A tree element: a uid, an optional title and text, ordered refs, and
/// ordered children.
///
/// `children` returns owned handles (cheap views or borrowed values), so a
/// walker can keep extending its frontier without holding a borrow of the
/// parent element.
pub trait TreeLike: Clone {
    fn uid(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
    fn text(&self) -> Option<&str>;
    fn ref_uids(&self) -> Vec<String>;
    fn children(&self) -> Vec<Self>;
}

impl<'a> TreeLike for &'a Value {
    fn uid(&self) -> Option<&str> {
        self.get("uid").and_then(Value::as_str)
    }

    fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    fn text(&self) -> Option<&str> {
        self.get("string").and_then(Value::as_str)
    }

    /// Ref entries are usually `{"uid": ..}` objects, but bare uid strings
    /// appear in older exports; both are accepted. Entries of neither
    /// shape are skipped, since rendering input is not validated.
    fn ref_uids(&self) -> Vec<String> {
        self.get("refs")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| match entry {
                        Value::String(uid) => Some(uid.clone()),
                        other => other
                            .get("uid")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        self.get("children")
            .and_then(Value::as_array)
            .map(|records| records.iter().collect())
            .unwrap_or_default()
    }
}

impl<'a> TreeLike for NodeView<'a> {
    fn uid(&self) -> Option<&str> {
        Some(self.node().uid.as_str())
    }

    fn title(&self) -> Option<&str> {
        self.node().title.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.node().string.as_deref()
    }

    fn ref_uids(&self) -> Vec<String> {
        self.node().direct_refs.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.child_views()
    }
}
