//! Upward file search.

use std::path::{Path, PathBuf};

use tracing::trace;

use super::normalize_path;

/// Find the first ancestor of `start` (including `start`) that contains
/// `relative`, returning the normalized path to it.
///
/// Returns `None` when `start` is `None` or when the search reaches a
/// directory whose parent is itself (or which has no parent) without a
/// match. The loop therefore runs at most once per path component.
pub fn find_file_upwards(start: Option<&Path>, relative: &Path) -> Option<PathBuf> {
    let mut dir = start?;

    loop {
        let candidate = dir.join(relative);
        if candidate.exists() {
            return Some(normalize_path(&candidate));
        }
        trace!(dir = %dir.display(), "{} not found, moving up", relative.display());

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_none_start_returns_none() {
        assert_eq!(find_file_upwards(None, Path::new("node_modules/rescript")), None);
    }

    #[test]
    fn test_finds_file_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested = root.join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(root.join("node_modules").join("pkg")).unwrap();

        let found = find_file_upwards(Some(nested.as_path()), Path::new("node_modules/pkg"));
        assert_eq!(found, Some(normalize_path(&root.join("node_modules/pkg"))));
    }

    #[test]
    fn test_prefers_nearest_match() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let project = root.join("packages").join("app");
        fs::create_dir_all(project.join("node_modules").join("pkg")).unwrap();
        fs::create_dir_all(root.join("node_modules").join("pkg")).unwrap();

        let found = find_file_upwards(Some(project.as_path()), Path::new("node_modules/pkg"));
        assert_eq!(found, Some(normalize_path(&project.join("node_modules/pkg"))));
    }

    #[test]
    fn test_matches_files_as_well_as_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("lib").join("bs")).unwrap();
        fs::write(root.join("lib/bs/compiler-info.json"), "{}").unwrap();

        let found = find_file_upwards(Some(root), Path::new("lib/bs/compiler-info.json"));
        assert_eq!(found, Some(normalize_path(&root.join("lib/bs/compiler-info.json"))));
    }

    #[test]
    fn test_missing_everywhere_terminates_with_none() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_file_upwards(
            Some(nested.as_path()),
            Path::new("definitely-not-here-7f3a/node_modules/rescript"),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_relative_start_terminates() {
        let found = find_file_upwards(
            Some(Path::new("x/y")),
            Path::new("definitely-not-here-7f3a"),
        );
        assert_eq!(found, None);
    }
}
