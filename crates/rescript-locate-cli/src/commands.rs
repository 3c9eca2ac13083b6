//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use rescript_locate_core::BinaryName;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path of a toolchain binary
    Bin {
        /// Binary file name (bsc.exe, rescript-editor-analysis.exe,
        /// rescript-tools.exe, rewatch.exe, rescript.exe, rescript)
        binary: BinaryName,

        /// Directory containing the binary; skips discovery
        #[arg(long = "platform-path", env = "RESCRIPT_PLATFORM_PATH")]
        platform_path: Option<PathBuf>,
    },

    /// Print the monorepo root a resolved binary path belongs to
    MonorepoRoot {
        /// Path of a resolved binary
        path: PathBuf,
    },

    /// Show how every toolchain binary resolves for the project
    Paths,
}
