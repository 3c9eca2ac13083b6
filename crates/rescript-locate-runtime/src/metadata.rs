//! Readers for the two JSON documents resolution consults.
//!
//! - `lib/bs/compiler-info.json`, written by the build system. Optional:
//!   callers fall through on any error.
//! - `node_modules/rescript/package.json`. Load-bearing: an error ends
//!   resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rescript_locate_core::LocateError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::fs;

/// Build metadata describing the compiler a project was last built with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompilerInfo {
    #[serde(default)]
    bsc_path: Option<String>,
}

impl CompilerInfo {
    pub async fn read(path: &Path) -> Result<Self, LocateError> {
        read_json(path).await
    }

    /// Path to `bsc.exe`, absolute or relative. Empty strings count as absent.
    pub fn bsc_path(&self) -> Option<&Path> {
        self.bsc_path
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(Path::new)
    }
}

/// The parts of the toolchain's `package.json` that resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainPackage {
    pub version: String,
    /// Wrapper script path relative to the package directory.
    pub wrapper_script: Option<PathBuf>,
}

#[derive(Deserialize)]
struct RawPackage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    bin: Option<PackageBin>,
}

// npm allows `bin` to be a single path, which is then named after the package.
#[derive(Deserialize)]
#[serde(untagged)]
enum PackageBin {
    Single(String),
    Map(BTreeMap<String, String>),
}

const WRAPPER_SCRIPT: &str = "rescript";

impl ToolchainPackage {
    pub async fn read(path: &Path) -> Result<Self, LocateError> {
        let contents = read_file(path).await?;
        Self::parse(path, &contents)
    }

    /// Parse a `package.json` document; `path` is only used in errors.
    fn parse(path: &Path, contents: &str) -> Result<Self, LocateError> {
        let raw: RawPackage = parse_json(path, contents)?;
        let version = raw
            .version
            .filter(|version| !version.trim().is_empty())
            .ok_or_else(|| LocateError::MissingField {
                path: path.to_path_buf(),
                field: "version",
            })?;

        let wrapper_script = match raw.bin {
            Some(PackageBin::Map(mut entries)) => entries.remove(WRAPPER_SCRIPT),
            Some(PackageBin::Single(script)) if raw.name.as_deref() == Some(WRAPPER_SCRIPT) => {
                Some(script)
            }
            _ => None,
        }
        .map(PathBuf::from);

        Ok(Self {
            version,
            wrapper_script,
        })
    }
}

async fn read_file(path: &Path) -> Result<String, LocateError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| LocateError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LocateError> {
    let contents = read_file(path).await?;
    parse_json(path, &contents)
}

fn parse_json<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, LocateError> {
    serde_json::from_str(contents).map_err(|e| LocateError::InvalidJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package(contents: &str) -> Result<ToolchainPackage, LocateError> {
        ToolchainPackage::parse(Path::new("package.json"), contents)
    }

    #[test]
    fn test_package_with_bin_map() {
        let pkg = package(
            r#"{"name": "rescript", "version": "12.0.0", "bin": {"rescript": "cli/rescript.js", "bsc": "cli/bsc.js"}}"#,
        )
        .unwrap();
        assert_eq!(pkg.version, "12.0.0");
        assert_eq!(pkg.wrapper_script, Some(PathBuf::from("cli/rescript.js")));
    }

    #[test]
    fn test_package_with_single_bin() {
        let pkg = package(r#"{"name": "rescript", "version": "9.1.4", "bin": "rescript"}"#).unwrap();
        assert_eq!(pkg.wrapper_script, Some(PathBuf::from("rescript")));

        let other = package(r#"{"name": "bs-platform", "version": "9.0.0", "bin": "bsb"}"#).unwrap();
        assert_eq!(other.wrapper_script, None);
    }

    #[test]
    fn test_package_without_bin_still_has_version() {
        let pkg = package(r#"{"version": "10.1.2"}"#).unwrap();
        assert_eq!(pkg.version, "10.1.2");
        assert_eq!(pkg.wrapper_script, None);
    }

    #[test]
    fn test_package_without_version_is_rejected() {
        let err = package(r#"{"name": "rescript", "bin": {"rescript": "rescript"}}"#).unwrap_err();
        assert!(matches!(err, LocateError::MissingField { field: "version", .. }));
    }

    #[test]
    fn test_package_invalid_json_is_rejected() {
        let err = package("{ not json").unwrap_err();
        assert!(matches!(err, LocateError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn test_compiler_info_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("compiler-info.json");
        fs::write(&path, r#"{"version": "12.0.0", "bsc_path": "/x/bsc.exe", "bsc_hash": "abc"}"#)
            .await
            .unwrap();

        let info = CompilerInfo::read(&path).await.unwrap();
        assert_eq!(info.bsc_path(), Some(Path::new("/x/bsc.exe")));
    }

    #[tokio::test]
    async fn test_compiler_info_missing_or_incomplete() {
        let temp_dir = TempDir::new().unwrap();

        let missing = CompilerInfo::read(&temp_dir.path().join("absent.json")).await;
        assert!(matches!(missing, Err(LocateError::ReadFailed { .. })));

        let path = temp_dir.path().join("compiler-info.json");
        fs::write(&path, r#"{"bsc_path": ""}"#).await.unwrap();
        assert_eq!(CompilerInfo::read(&path).await.unwrap().bsc_path(), None);

        fs::write(&path, r#"{"bsc_path": 42}"#).await.unwrap();
        assert!(matches!(
            CompilerInfo::read(&path).await,
            Err(LocateError::InvalidJson { .. })
        ));
    }
}
