//! CLI-specific error types and exit codes.

use std::path::PathBuf;

use rescript_locate_core::{BinaryName, HostPlatform};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The resolver found nothing for the requested binary.
    #[error(
        "{binary} not found for {host} from {project_root}\n\nInstall the ReScript toolchain in this project:\n  npm install rescript"
    )]
    BinaryNotFound {
        binary: BinaryName,
        host: HostPlatform,
        project_root: PathBuf,
    },

    /// The path has no `node_modules` segment.
    #[error("{0} is not inside a node_modules directory")]
    NoMonorepoRoot(PathBuf),

    /// IO error (current directory unavailable, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::BinaryNotFound { .. } | Self::NoMonorepoRoot(_) => 1,
            Self::Io(_) => 74, // EX_IOERR
        }
    }
}
