//! Toolchain binary resolution.
//!
//! This module provides the resolution policy for every [`BinaryName`],
//! evaluated in order until one step gives a definitive answer:
//!
//! 1. An explicit platform path, returned without checking the filesystem
//! 2. The compiler recorded in `lib/bs/compiler-info.json` (native binaries
//!    only; any problem with that file falls through)
//! 3. The installed `rescript` package, found by walking up from the project
//!    root, using the layout its version dictates
//!
//! Step 3 only returns paths that exist.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rescript_locate_core::{
    BinaryName, HostPlatform, LayoutGeneration, LocateError, PlatformPackageLoader,
    ResolutionRequest, ToolchainLayout, VersionComparator, find_file_upwards, normalize_path,
};
use tokio::fs;
use tracing::debug;

use crate::metadata::{CompilerInfo, ToolchainPackage};
use crate::ports_impl::{InstalledPlatformPackages, SemverComparator};

const PACKAGE_MANIFEST: &str = "package.json";

/// Resolve `request` with the default resolver for this host.
pub async fn find_binary(request: &ResolutionRequest) -> Option<PathBuf> {
    BinaryResolver::new().resolve(request).await
}

/// Resolves toolchain binaries for a host platform.
///
/// Holds no per-call state, so one resolver can serve concurrent requests.
#[derive(Clone)]
pub struct BinaryResolver {
    layout: ToolchainLayout,
    host: HostPlatform,
    versions: Arc<dyn VersionComparator>,
    packages: Arc<dyn PlatformPackageLoader>,
}

impl BinaryResolver {
    /// Resolver for the current host with the default layout, semver
    /// comparison and on-disk platform packages.
    pub fn new() -> Self {
        Self {
            layout: ToolchainLayout::default(),
            host: HostPlatform::current(),
            versions: Arc::new(SemverComparator::new()),
            packages: Arc::new(InstalledPlatformPackages::new()),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ToolchainLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: HostPlatform) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn with_version_comparator(mut self, versions: Arc<dyn VersionComparator>) -> Self {
        self.versions = versions;
        self
    }

    #[must_use]
    pub fn with_package_loader(mut self, packages: Arc<dyn PlatformPackageLoader>) -> Self {
        self.packages = packages;
        self
    }

    pub const fn host(&self) -> &HostPlatform {
        &self.host
    }

    /// Resolve the requested binary.
    ///
    /// Returns `None` when the binary cannot be located; the reason is only
    /// logged at debug level.
    pub async fn resolve(&self, request: &ResolutionRequest) -> Option<PathBuf> {
        let binary = request.binary;

        if let Some(platform_path) = &request.platform_path {
            let path = normalize_path(&platform_path.join(binary.file_name()));
            debug!(%binary, path = %path.display(), "Using explicit platform path");
            return Some(path);
        }

        if binary.is_native()
            && let Some(project_root) = request.project_root.as_deref()
            && let Some(bsc_path) = self.recorded_compiler(project_root).await
            && let Some(path) = binary_next_to_compiler(&bsc_path, binary)
        {
            debug!(%binary, path = %path.display(), "Using compiler from build metadata");
            return Some(path);
        }

        match self
            .resolve_from_toolchain(request.project_root.as_deref(), binary)
            .await
        {
            Ok(path) => {
                debug!(%binary, path = %path.display(), "Resolved from installed toolchain");
                Some(path)
            }
            Err(e) => {
                debug!(%binary, "Binary not resolved: {e}");
                None
            }
        }
    }

    /// `bsc_path` from the project's build metadata, if there is a usable one.
    async fn recorded_compiler(&self, project_root: &Path) -> Option<PathBuf> {
        let info_path = project_root.join(&self.layout.compiler_info);
        match CompilerInfo::read(&info_path).await {
            Ok(info) => info.bsc_path().map(Path::to_path_buf),
            Err(e) => {
                debug!("Skipping build metadata: {e}");
                None
            }
        }
    }

    async fn resolve_from_toolchain(
        &self,
        project_root: Option<&Path>,
        binary: BinaryName,
    ) -> Result<PathBuf, LocateError> {
        let toolchain_dir = find_file_upwards(project_root, &self.layout.package_dir)
            .ok_or_else(|| LocateError::ToolchainNotFound(self.layout.package_dir.clone()))?;
        debug!(toolchain = %toolchain_dir.display(), "Found toolchain package");

        let manifest = toolchain_dir.join(PACKAGE_MANIFEST);
        let package = ToolchainPackage::read(&manifest).await?;

        let candidate = if binary.is_native() {
            self.native_candidate(&toolchain_dir, &package, binary).await?
        } else {
            let script = package
                .wrapper_script
                .as_deref()
                .ok_or(LocateError::MissingField {
                    path: manifest,
                    field: "bin.rescript",
                })?;
            toolchain_dir.join(script)
        };

        if exists(&candidate).await {
            Ok(normalize_path(&candidate))
        } else {
            Err(LocateError::CandidateNotFound(candidate))
        }
    }

    async fn native_candidate(
        &self,
        toolchain_dir: &Path,
        package: &ToolchainPackage,
        binary: BinaryName,
    ) -> Result<PathBuf, LocateError> {
        let generation = self
            .layout
            .generation_for(&package.version, self.versions.as_ref())?;
        debug!(version = %package.version, ?generation, "Selected toolchain layout");

        match generation {
            LayoutGeneration::Modern => self.platform_package_candidate(toolchain_dir, binary).await,
            LayoutGeneration::Legacy => Ok(self.legacy_candidate(toolchain_dir, binary).await),
        }
    }

    async fn platform_package_candidate(
        &self,
        toolchain_dir: &Path,
        binary: BinaryName,
    ) -> Result<PathBuf, LocateError> {
        let target = self
            .host
            .target()
            .ok_or_else(|| LocateError::UnsupportedPlatform {
                os: self.host.os().to_string(),
                arch: self.host.arch().to_string(),
            })?;

        // pnpm and friends symlink the toolchain package, while the platform
        // package is installed next to the real directory.
        let real_dir = fs::canonicalize(toolchain_dir)
            .await
            .unwrap_or_else(|_| toolchain_dir.to_path_buf());
        let packages_dir = real_dir.parent().unwrap_or(&real_dir);
        let package_dir = packages_dir
            .join(&self.layout.platform_scope)
            .join(target.package_name());

        let bin_paths = self.packages.load(&package_dir).await?;
        bin_paths
            .for_binary(binary)
            .map(Path::to_path_buf)
            .ok_or_else(|| LocateError::MissingField {
                path: package_dir,
                field: "binPaths",
            })
    }

    async fn legacy_candidate(&self, toolchain_dir: &Path, binary: BinaryName) -> PathBuf {
        let candidate = toolchain_dir
            .join(self.host.legacy_platform_dir())
            .join(binary.file_name());

        // Older releases had no ARM64 directory and shipped those hosts the
        // generic platform build.
        if self.host.is_arm64() && !exists(&candidate).await {
            debug!(missing = %candidate.display(), "Falling back to generic platform directory");
            return toolchain_dir
                .join(self.host.os())
                .join(binary.file_name());
        }

        candidate
    }
}

impl Default for BinaryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BinaryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryResolver")
            .field("layout", &self.layout)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

/// Binary co-located with the recorded compiler. The wrapper script is not,
/// so it yields `None`.
fn binary_next_to_compiler(bsc_path: &Path, binary: BinaryName) -> Option<PathBuf> {
    if binary.is_compiler() {
        return Some(normalize_path(bsc_path));
    }
    if !binary.is_native() {
        return None;
    }
    let bin_dir = bsc_path.parent().unwrap_or(Path::new(""));
    Some(normalize_path(&bin_dir.join(binary.file_name())))
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
