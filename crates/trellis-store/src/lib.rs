//! Load and persist collaborators for the graph index
//!
//! The core never touches disk itself; everything file-shaped lives here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde_json::Value;
use trellis_core::{GraphIndex, RefFilter};

/// Checkpoint directory: .trellis/
pub const CHECKPOINT_DIR: &str = ".trellis";

/// Checkpoint file inside [`CHECKPOINT_DIR`].
pub const CHECKPOINT_FILE: &str = "checkpoint.json";

/// Get checkpoint directory path
pub fn checkpoint_dir(root: &Path) -> PathBuf {
    root.join(CHECKPOINT_DIR)
}

/// Get checkpoint file path
pub fn checkpoint_path(root: &Path) -> PathBuf {
    root.join(CHECKPOINT_DIR).join(CHECKPOINT_FILE)
}

/// Ensure checkpoint directory exists
pub fn ensure_checkpoint_dir(root: &Path) -> std::io::Result<()> {
    let dir = checkpoint_dir(root);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(())
}

/// Remove the checkpoint directory and everything in it.
pub fn clear_checkpoints(root: &Path) -> std::io::Result<()> {
    let dir = checkpoint_dir(root);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    Ok(())
}

/// Load a raw export: a JSON array of page records.
///
/// An empty array is a valid, empty export; I/O failures, parse failures,
/// and non-array roots are errors.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading export {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing export {}", path.display()))?;
    match value {
        Value::Array(records) => {
            tracing::debug!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        _ => bail!(
            "export {} must be a JSON array of page records",
            path.display()
        ),
    }
}

/// Persist a fully constructed index as pretty JSON.
pub fn save_checkpoint(index: &GraphIndex, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating checkpoint directory {}", parent.display()))?;
        }
    }

    let json_str = serde_json::to_string_pretty(index)?;
    fs::write(path, json_str)
        .with_context(|| format!("writing checkpoint {}", path.display()))?;

    tracing::debug!("Checkpoint saved: {}", path.display());
    Ok(())
}

/// Restore a previously persisted index.
pub fn load_checkpoint(path: &Path) -> anyhow::Result<GraphIndex> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading checkpoint {}", path.display()))?;
    let index = serde_json::from_str(&text)
        .with_context(|| format!("parsing checkpoint {}", path.display()))?;

    tracing::debug!("Checkpoint loaded from: {}", path.display());
    Ok(index)
}

/// Load an export, construct the index, and checkpoint it when a
/// destination is given. One attempt each; any failure propagates as-is.
pub fn build_index(
    input: &Path,
    checkpoint: Option<&Path>,
    filter: &RefFilter,
) -> anyhow::Result<GraphIndex> {
    let records = load_records(input)?;
    let index = GraphIndex::from_records(records, filter)?;
    if let Some(dest) = checkpoint {
        save_checkpoint(&index, dest)?;
    }
    Ok(index)
}
