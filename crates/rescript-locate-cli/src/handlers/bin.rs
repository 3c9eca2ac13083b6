//! Bin command handler.

use std::path::PathBuf;

use anyhow::Result;
use rescript_locate_core::{BinaryName, ResolutionRequest};
use rescript_locate_runtime::BinaryResolver;

use crate::error::CliError;

/// Resolve a binary and print its path.
pub async fn execute(
    resolver: &BinaryResolver,
    project_root: PathBuf,
    binary: BinaryName,
    platform_path: Option<PathBuf>,
) -> Result<()> {
    let path = resolve(resolver, project_root, binary, platform_path).await?;
    println!("{}", path.display());
    Ok(())
}

/// Resolve a binary, turning a miss into [`CliError::BinaryNotFound`].
pub async fn resolve(
    resolver: &BinaryResolver,
    project_root: PathBuf,
    binary: BinaryName,
    platform_path: Option<PathBuf>,
) -> Result<PathBuf, CliError> {
    let mut request = ResolutionRequest::new(binary).with_project_root(project_root.clone());
    if let Some(platform_path) = platform_path {
        request = request.with_platform_path(platform_path);
    }

    resolver
        .resolve(&request)
        .await
        .ok_or_else(|| CliError::BinaryNotFound {
            binary,
            host: resolver.host().clone(),
            project_root,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescript_locate_core::HostPlatform;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_platform_path_is_used() {
        let resolver = BinaryResolver::new();
        let path = resolve(
            &resolver,
            PathBuf::from("/work/app"),
            BinaryName::Bsc,
            Some(PathBuf::from("/opt/bin")),
        )
        .await
        .unwrap();
        assert_eq!(path, PathBuf::from("/opt/bin/bsc.exe"));
    }

    #[tokio::test]
    async fn test_missing_toolchain_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = BinaryResolver::new().with_host(HostPlatform::new("linux", "x64"));

        let err = resolve(&resolver, temp_dir.path().to_path_buf(), BinaryName::Bsc, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::BinaryNotFound {
                binary: BinaryName::Bsc,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_resolves_from_compiler_info() {
        let temp_dir = TempDir::new().unwrap();
        let info_dir = temp_dir.path().join("lib").join("bs");
        fs::create_dir_all(&info_dir).unwrap();
        fs::write(
            info_dir.join("compiler-info.json"),
            r#"{"bsc_path": "/x/bsc.exe"}"#,
        )
        .unwrap();

        let path = resolve(
            &BinaryResolver::new(),
            temp_dir.path().to_path_buf(),
            BinaryName::Tools,
            None,
        )
        .await
        .unwrap();
        assert_eq!(path, PathBuf::from("/x/rescript-tools.exe"));
    }
}
