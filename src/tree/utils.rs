//! Shared path helpers for tree walking

use std::path::{Component, Path};

/// Parent directory of `path`, treating a bare file name as living in ".".
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Get the display name of a path, defaulting to "." for roots like "." or "/".
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Whether a file name marks a hidden entry.
pub fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Number of components `path` lies below `root`, or `None` if it is not inside it.
pub fn depth_below(root: &Path, path: &Path) -> Option<usize> {
    path.strip_prefix(root).ok().map(|rel| {
        rel.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .count()
    })
}
