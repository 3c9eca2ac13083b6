//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Locate the binaries of an installed ReScript toolchain.
#[derive(Parser)]
#[command(name = "rescript-locate")]
#[command(about = "Locate ReScript toolchain binaries for a project")]
#[command(version)]
pub struct Cli {
    /// Project directory to resolve from (defaults to the current directory)
    #[arg(long = "project-root", global = true)]
    pub project_root: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
