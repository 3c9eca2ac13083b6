//! Command handlers.
//!
//! Handlers are thin: they build requests, call the resolver and format the
//! result for the terminal. Resolution logic stays in the runtime crate.

pub mod bin;
pub mod monorepo_root;
pub mod paths;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::error::CliError;

/// The explicit `--project-root`, or the current directory.
pub fn project_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let root = match explicit {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| CliError::Io(e.to_string()))?,
    };
    debug!(project_root = %root.display(), "Resolving from project root");
    Ok(root)
}
