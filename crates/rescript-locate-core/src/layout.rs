//! Where the toolchain keeps its files.

use std::path::PathBuf;

use crate::ports::{VersionComparator, VersionError};

/// Installed toolchain package, relative to an ancestor of the project root.
pub const DEFAULT_PACKAGE_DIR: &str = "node_modules/rescript";

/// Build metadata written by the build system, relative to the project root.
pub const DEFAULT_COMPILER_INFO: &str = "lib/bs/compiler-info.json";

/// npm scope of the per-platform binary packages.
pub const DEFAULT_PLATFORM_SCOPE: &str = "@rescript";

/// First release that ships native binaries in per-platform packages.
pub const DEFAULT_MODERN_LAYOUT_THRESHOLD: &str = "12.0.0-alpha.13";

/// Toolchain layout configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainLayout {
    pub package_dir: PathBuf,
    pub compiler_info: PathBuf,
    pub platform_scope: String,
    pub modern_layout_threshold: String,
}

impl Default for ToolchainLayout {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from(DEFAULT_PACKAGE_DIR),
            compiler_info: PathBuf::from(DEFAULT_COMPILER_INFO),
            platform_scope: DEFAULT_PLATFORM_SCOPE.to_string(),
            modern_layout_threshold: DEFAULT_MODERN_LAYOUT_THRESHOLD.to_string(),
        }
    }
}

/// How an installed toolchain version lays out its native binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutGeneration {
    /// Separate per-platform packages next to the toolchain package.
    Modern,
    /// Platform subdirectories inside the toolchain package.
    Legacy,
}

impl ToolchainLayout {
    /// Pick the layout generation for an installed toolchain `version`.
    pub fn generation_for(
        &self,
        version: &str,
        versions: &dyn VersionComparator,
    ) -> Result<LayoutGeneration, VersionError> {
        if versions.is_at_least(version, &self.modern_layout_threshold)? {
            Ok(LayoutGeneration::Modern)
        } else {
            Ok(LayoutGeneration::Legacy)
        }
    }
}
