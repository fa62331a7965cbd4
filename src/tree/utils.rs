//! Shared utility functions for tree walking

use std::path::{Component, Path, PathBuf};

/// Get the name of a path, defaulting to "." for paths without a final component.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Make a path absolute against the current directory and normalize it
/// lexically: `.` components are dropped and `..` removes the component before
/// it. Symlinks are not resolved, so `link/..` collapses to the link's parent.
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            // Popping at the root is a no-op, so "/.." stays "/".
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
