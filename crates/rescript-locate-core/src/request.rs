use std::path::PathBuf;

use crate::binary::BinaryName;

/// A single binary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Directory to start the toolchain search from. Without it only the
    /// explicit platform path can produce a result.
    pub project_root: Option<PathBuf>,
    pub binary: BinaryName,
    /// Directory that holds the binary, bypassing all discovery.
    pub platform_path: Option<PathBuf>,
}

impl ResolutionRequest {
    pub const fn new(binary: BinaryName) -> Self {
        Self {
            project_root: None,
            binary,
            platform_path: None,
        }
    }

    #[must_use]
    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    #[must_use]
    pub fn with_platform_path(mut self, platform_path: impl Into<PathBuf>) -> Self {
        self.platform_path = Some(platform_path.into());
        self
    }
}
