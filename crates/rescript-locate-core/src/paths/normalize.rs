//! Lexical path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem.
///
/// Removes `.` components and repeated separators, and resolves `..` against
/// the preceding component. Leading `..` on relative paths is kept; `..`
/// directly below a root is dropped. An empty result becomes `.`.
///
/// Normalizing an already normalized path returns it unchanged.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) => {}
                _ => components.push(component),
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.into_iter().collect()
}
