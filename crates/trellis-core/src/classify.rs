//! Page classification by structural/naming convention

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::date::is_valid_date;
use crate::error::GraphError;
use crate::index::GraphIndex;

/// Partition of the page set. Every title lands in exactly one of the four
/// sets; `bars` members may additionally appear inside `with_ref` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategorySets {
    /// Pages whose root uid is itself a valid `DD-MM-YYYY` date.
    pub daily_pages: HashSet<String>,
    /// Titles containing the `|` separator.
    pub bars: HashSet<String>,
    /// Titles containing the `/` path separator.
    pub backslashes: HashSet<String>,
    /// Everything else.
    pub other: HashSet<String>,
    /// First-referenced page title -> the bar-titles whose first direct
    /// ref resolves to it.
    pub with_ref: HashMap<String, HashSet<String>>,
}

/// Classify every page of the index, first match wins:
/// daily date uid, then `|`, then `/`, then other.
///
/// Fails with [`GraphError::UnknownUid`] when a bar-page's first direct
/// ref does not resolve to any page root.
pub fn classify_pages(index: &GraphIndex) -> Result<CategorySets, GraphError> {
    let mut sets = CategorySets::default();

    for (title, &root) in index.pages() {
        let Some(node) = index.graph().node(root) else {
            continue;
        };
        if is_valid_date(&node.uid) {
            sets.daily_pages.insert(title.clone());
        } else if title.contains('|') {
            sets.bars.insert(title.clone());
            if let Some(first_ref) = node.direct_refs.first() {
                let target = index
                    .uid_to_title()
                    .get(first_ref)
                    .ok_or_else(|| GraphError::UnknownUid(first_ref.clone()))?;
                sets.with_ref
                    .entry(target.clone())
                    .or_default()
                    .insert(title.clone());
            }
        } else if title.contains('/') {
            sets.backslashes.insert(title.clone());
        } else {
            sets.other.insert(title.clone());
        }
    }

    Ok(sets)
}
