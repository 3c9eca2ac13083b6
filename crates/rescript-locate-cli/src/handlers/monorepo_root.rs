//! Monorepo root command handler.

use std::path::Path;

use anyhow::Result;

use crate::error::CliError;

/// Print the monorepo root derived from `binary_path`.
pub fn execute(binary_path: &Path) -> Result<()> {
    let root = rescript_locate_core::monorepo_root(binary_path)
        .ok_or_else(|| CliError::NoMonorepoRoot(binary_path.to_path_buf()))?;
    println!("{}", root.display());
    Ok(())
}
