//! dspchain CLI - browse and check DSP preset catalogs.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dspchain")]
#[command(author, version, about = "DSP preset catalog tool", long_about = None)]
struct Cli {
    /// Configuration directory holding `dspconfig` and `presets/dsp/`
    #[arg(long, global = true, env = "DSPCHAIN_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log loader activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every preset in the catalog
    List(commands::list::ListArgs),

    /// Show the stages of one preset
    Show(commands::show::ShowArgs),

    /// Parse a single preset file and report problems
    Check(commands::check::CheckArgs),

    /// Show catalog locations
    Paths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_dir = cli.config_dir.as_deref();
    match cli.command {
        Commands::List(args) => commands::list::run(config_dir, args),
        Commands::Show(args) => commands::show::run(config_dir, args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Paths => commands::paths::run(config_dir),
    }
}
