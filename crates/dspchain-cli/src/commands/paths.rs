//! Catalog location command.

use dspchain_config::CatalogPaths;
use std::path::Path;

pub fn run(config_dir: Option<&Path>) -> anyhow::Result<()> {
    let paths = CatalogPaths::resolve(config_dir)?;

    let status = |p: &Path| if p.exists() { "" } else { " (missing)" };
    println!(
        "Current configuration: {}{}",
        paths.current_config.display(),
        status(&paths.current_config)
    );
    println!(
        "Preset directory:      {}{}",
        paths.preset_dir.display(),
        status(&paths.preset_dir)
    );
    Ok(())
}
