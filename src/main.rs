use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hourly::shell;

#[derive(Parser)]
#[command(name = "hourly")]
#[command(version)]
#[command(about = "Track worked hours per project with an interactive stopwatch", long_about = None)]
struct Cli {
    /// Project history file to open directly, skipping the welcome menu
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    shell::run(cli.file)
}
