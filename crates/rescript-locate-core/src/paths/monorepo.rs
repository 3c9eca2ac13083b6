//! Monorepo root derivation.
//!
//! Package managers hoist dependencies into a shared `node_modules` at the
//! workspace root, so a binary resolved from a nested package lives below
//! that root. The root is whatever precedes the first `node_modules` segment.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::normalize_path;

/// Directory segment package managers install dependencies into.
pub const DEPENDENCY_DIR_MARKER: &str = "node_modules";

// Either separator, so Windows paths work on every host.
static MONOREPO_ROOT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(DEPENDENCY_DIR_MARKER);
    Regex::new(&format!(r"^(.*?)[\\/]+{marker}[\\/]+")).expect("monorepo root pattern is valid")
});

/// Derive the monorepo root from a resolved binary path.
///
/// Returns the normalized directory directly containing the first
/// `node_modules` segment, or `None` when there is no such segment. The match
/// is case-sensitive.
pub fn monorepo_root(binary_path: impl AsRef<Path>) -> Option<PathBuf> {
    let raw = binary_path.as_ref().to_string_lossy();
    let captures = MONOREPO_ROOT_PATTERN.captures(&raw)?;
    let prefix = captures.get(1)?.as_str();
    Some(normalize_path(Path::new(prefix)))
}
