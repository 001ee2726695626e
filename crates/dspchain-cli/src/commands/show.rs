//! Single preset detail command.

use clap::Args;
use std::path::Path;

use super::common::open_catalog;

#[derive(Args)]
pub struct ShowArgs {
    /// Preset name (`Custom` for the current configuration)
    name: String,

    /// Print the preset as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(config_dir: Option<&Path>, args: ShowArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(config_dir)?;
    let preset = catalog.find(&args.name).ok_or_else(|| {
        anyhow::anyhow!(
            "Preset '{}' not found. Use 'dspchain list' to see available presets.",
            args.name
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(preset)?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(path) = &preset.save_path {
        println!("Current configuration, saved to {}", path.display());
        println!();
    }

    println!("Stages ({}):", preset.nodes.len());
    for (i, node) in preset.nodes.iter().enumerate() {
        let state = match node.enabled {
            Some(false) => " [DISABLED]",
            _ => "",
        };
        println!("  {}. {}{}", i + 1, node.stage_type, state);

        for item in &node.items {
            println!("      {} = {}", item.name(), item.value);
        }
    }

    Ok(())
}
