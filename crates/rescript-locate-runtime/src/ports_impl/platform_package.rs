//! Loader for platform packages installed in `node_modules`.
//!
//! A platform package looks like:
//!
//! ```text
//! @rescript/linux-x64/
//!   bin.js          exports binPaths
//!   bin/bsc.exe
//!   bin/rescript.exe
//!   ...
//! ```
//!
//! `bin.js` cannot be evaluated from Rust. Its export maps every key to
//! `bin/<file>` inside the package, so this loader uses `bin.js` as the
//! installation marker and builds the same mapping.

use std::path::Path;

use async_trait::async_trait;
use rescript_locate_core::{BinPaths, LocateError, PlatformPackageLoader};
use tokio::fs;
use tracing::debug;

/// Module every platform package ships.
pub const PLATFORM_MODULE: &str = "bin.js";

/// Directory inside a platform package holding the executables.
pub const PLATFORM_BIN_DIR: &str = "bin";

/// Keys and files exported by `bin.js`.
const EXPORTED_BINARIES: [(&str, &str); 5] = [
    ("bsc_exe", "bsc.exe"),
    ("ninja_exe", "ninja.exe"),
    ("rescript_exe", "rescript.exe"),
    ("rescript_editor_analysis_exe", "rescript-editor-analysis.exe"),
    ("rescript_tools_exe", "rescript-tools.exe"),
];

/// Reads platform packages from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstalledPlatformPackages;

impl InstalledPlatformPackages {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformPackageLoader for InstalledPlatformPackages {
    async fn load(&self, package_dir: &Path) -> Result<BinPaths, LocateError> {
        let module = package_dir.join(PLATFORM_MODULE);
        if !fs::try_exists(&module).await.unwrap_or(false) {
            return Err(LocateError::PlatformPackageMissing(package_dir.to_path_buf()));
        }

        let bin_dir = package_dir.join(PLATFORM_BIN_DIR);
        debug!(package = %package_dir.display(), "Loaded platform package");

        Ok(EXPORTED_BINARIES
            .into_iter()
            .map(|(key, file)| (key, bin_dir.join(file)))
            .collect())
    }
}
