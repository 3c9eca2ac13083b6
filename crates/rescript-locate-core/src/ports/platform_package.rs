//! Platform package port.
//!
//! From the modern layout onward, native binaries ship in one npm package
//! per OS and architecture (e.g. `@rescript/linux-x64`). Each package exports
//! a `binPaths` mapping from a fixed key to the binary's location. This port
//! hides how that mapping is obtained.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::binary::BinaryName;
use crate::error::LocateError;

/// The `binPaths` mapping exported by a platform package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinPaths(BTreeMap<String, PathBuf>);

impl BinPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        self.0.insert(key.into(), path.into());
    }

    pub fn get(&self, key: &str) -> Option<&Path> {
        self.0.get(key).map(PathBuf::as_path)
    }

    /// Look up a binary by its fixed key. Always `None` for the wrapper script.
    pub fn for_binary(&self, binary: BinaryName) -> Option<&Path> {
        binary.bin_paths_key().and_then(|key| self.get(key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, P: Into<PathBuf>> FromIterator<(K, P)> for BinPaths {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, path)| (key.into(), path.into()))
                .collect(),
        )
    }
}

/// Loads the `binPaths` mapping of an installed platform package.
///
/// # Example
///
/// ```ignore
/// use rescript_locate_core::{BinaryName, PlatformPackageLoader};
///
/// async fn bsc(loader: &dyn PlatformPackageLoader, dir: &Path) -> Option<PathBuf> {
///     let paths = loader.load(dir).await.ok()?;
///     paths.for_binary(BinaryName::Bsc).map(Path::to_path_buf)
/// }
/// ```
#[async_trait]
pub trait PlatformPackageLoader: Send + Sync {
    /// Load the mapping for the package rooted at `package_dir`.
    ///
    /// Returns [`LocateError::PlatformPackageMissing`] when nothing is
    /// installed there.
    async fn load(&self, package_dir: &Path) -> Result<BinPaths, LocateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed mapping for testing.
    struct StaticLoader(BinPaths);

    #[async_trait]
    impl PlatformPackageLoader for StaticLoader {
        async fn load(&self, package_dir: &Path) -> Result<BinPaths, LocateError> {
            if self.0.is_empty() {
                return Err(LocateError::PlatformPackageMissing(package_dir.to_path_buf()));
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_for_binary_uses_fixed_keys() {
        let paths: BinPaths = [
            ("bsc_exe", "/pkg/bin/bsc.exe"),
            ("rescript_exe", "/pkg/bin/rescript.exe"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            paths.for_binary(BinaryName::Bsc),
            Some(Path::new("/pkg/bin/bsc.exe"))
        );
        assert_eq!(
            paths.for_binary(BinaryName::Rewatch),
            Some(Path::new("/pkg/bin/rescript.exe"))
        );
        assert_eq!(paths.for_binary(BinaryName::Tools), None);
        assert_eq!(paths.for_binary(BinaryName::Rescript), None);
    }

    #[test]
    fn test_loader_through_trait_object() {
        let mut paths = BinPaths::new();
        paths.insert("bsc_exe", "/pkg/bin/bsc.exe");
        let loader: Box<dyn PlatformPackageLoader> = Box::new(StaticLoader(paths));

        let loaded = tokio_test::block_on(loader.load(Path::new("/pkg"))).unwrap();
        assert_eq!(loaded.len(), 1);

        let missing: Box<dyn PlatformPackageLoader> = Box::new(StaticLoader(BinPaths::new()));
        let err = tokio_test::block_on(missing.load(Path::new("/nowhere"))).unwrap_err();
        assert!(matches!(err, LocateError::PlatformPackageMissing(_)));
    }
}
