//! CLI command implementations

use std::path::{Path, PathBuf};

use trellis_core::{RefFilter, classify_pages};
use trellis_render::render_outline;

pub fn index(input: PathBuf, root: &Path, save: bool) -> anyhow::Result<()> {
    tracing::info!("Indexing export: {}", input.display());

    let checkpoint = save.then(|| trellis_store::checkpoint_path(root));
    let index = trellis_store::build_index(&input, checkpoint.as_deref(), &RefFilter::default())?;

    let total_refs: usize = index
        .graph()
        .all_nodes()
        .map(|node| node.direct_refs.len())
        .sum();
    tracing::info!(
        "Indexed {} pages, {} nodes, {} refs",
        index.page_count(),
        index.graph().node_count(),
        total_refs
    );
    if let Some(dest) = checkpoint {
        tracing::info!("Checkpoint written to {}", dest.display());
    }

    Ok(())
}

pub fn classify(input: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Classifying export: {}", input.display());

    let index = trellis_store::build_index(&input, None, &RefFilter::default())?;
    let sets = classify_pages(&index)?;

    tracing::info!(
        "Classified {} pages: {} daily, {} bars, {} backslashes, {} other",
        index.page_count(),
        sets.daily_pages.len(),
        sets.bars.len(),
        sets.backslashes.len(),
        sets.other.len()
    );
    println!("{}", serde_json::to_string_pretty(&sets)?);

    Ok(())
}

pub fn show(input: PathBuf, page: Option<String>, position: Option<usize>) -> anyhow::Result<()> {
    let index = trellis_store::build_index(&input, None, &RefFilter::default())?;

    let title = match (page, position) {
        (Some(title), _) => title,
        (None, Some(position)) => {
            let node = index.page_by_position(position)?;
            match &node.title {
                Some(title) => title.clone(),
                None => anyhow::bail!("record at position {position} is not a titled page"),
            }
        }
        (None, None) => anyhow::bail!("pass --page or --position to pick a page"),
    };

    let view = index.page_view(&title)?;
    println!("{}", render_outline(view));

    Ok(())
}

pub fn clear(root: &Path) -> anyhow::Result<()> {
    tracing::info!("Clearing checkpoints under: {}", root.display());

    trellis_store::clear_checkpoints(root)?;

    tracing::info!("Checkpoint store cleared");
    Ok(())
}
