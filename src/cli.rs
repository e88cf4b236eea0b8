use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments. Running `stackz` with no arguments launches the TUI.
#[derive(Debug, Parser)]
#[command(name = "stackz", version, about = "A keyboard-driven task list for the terminal")]
pub struct Cli {
    /// Path to the tasks file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
