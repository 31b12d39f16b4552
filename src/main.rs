//! Entry point for the snapshot diff reporter.

use clap::{
    Parser,
    Subcommand,
};
use resx_snapshot_diff::commands::{
    self,
    export_diff::ExportDiffArgs,
    snapshot::SnapshotArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "resx-snapshot-diff")]
#[command(about = "Report meaningful localized-resource changes against a snapshot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a change report from the snapshot diff
    ExportDiff(ExportDiffArgs),
    /// Capture the catalog's current values as a snapshot
    Snapshot(SnapshotArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ExportDiff(args) => commands::export_diff::execute(&args),
        Commands::Snapshot(args) => commands::snapshot::execute(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
