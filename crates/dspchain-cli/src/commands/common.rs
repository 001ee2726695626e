//! Shared CLI helpers used across multiple commands.

use dspchain_config::{CatalogPaths, PresetCatalog, StageNode};
use std::path::Path;

/// Resolve catalog locations and load the catalog.
pub fn open_catalog(config_dir: Option<&Path>) -> anyhow::Result<PresetCatalog> {
    let paths = CatalogPaths::resolve(config_dir)?;
    Ok(PresetCatalog::open(paths)?)
}

/// One-line summary of a stage, e.g. `eq (2 params)` or `comp [off] (1 param)`.
pub fn stage_summary(node: &StageNode) -> String {
    let state = match node.enabled {
        Some(false) => " [off]",
        _ => "",
    };
    let count = node.items.len();
    let noun = if count == 1 { "param" } else { "params" };
    format!("{}{} ({} {})", node.stage_type, state, count, noun)
}
