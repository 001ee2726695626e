//! Catalog listing command.

use clap::Args;
use std::path::Path;

use super::common::{open_catalog, stage_summary};

#[derive(Args)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(config_dir: Option<&Path>, args: ListArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(config_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.records())?);
        return Ok(());
    }

    println!("Presets:");
    println!("========");
    if catalog.is_empty() {
        println!("  (none)");
        println!();
        println!(
            "  Add presets as *.txt files in {}",
            catalog.paths().preset_dir.display()
        );
        return Ok(());
    }

    for preset in catalog.iter() {
        let marker = if preset.is_current { " *" } else { "" };
        let stages: Vec<String> = preset.nodes.iter().map(stage_summary).collect();
        println!("  {:20}{} - {}", preset.name, marker, stages.join(" -> "));
    }

    if catalog.current().is_some() {
        println!();
        println!("  * current configuration");
    }

    Ok(())
}
