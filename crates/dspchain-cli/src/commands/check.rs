//! Single file validation command.

use clap::Args;
use dspchain_config::{GrammarVariant, PresetRecord};
use std::path::PathBuf;

use super::common::stage_summary;

#[derive(Args)]
pub struct CheckArgs {
    /// Preset file to parse
    file: PathBuf,

    /// Expect `TYPE FLAG {` headers, as in the current configuration file
    #[arg(long)]
    with_enabled_flag: bool,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let variant = if args.with_enabled_flag {
        GrammarVariant::WithEnabledFlag
    } else {
        GrammarVariant::Bare
    };

    let name = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("preset")
        .to_string();
    let preset = PresetRecord::load(name, &args.file, variant)?;

    println!("{}: OK, {} stages", args.file.display(), preset.len());
    for node in &preset.nodes {
        println!("  {}", stage_summary(node));
    }
    Ok(())
}
