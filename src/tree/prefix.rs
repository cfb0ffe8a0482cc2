//! Prefix composition
//!
//! Every ancestor strictly between the traversal root and an entry contributes
//! one indent column, chosen from that ancestor's own position among its
//! siblings. The entry then adds its branch connector. Columns are resolved
//! recursively on the parent chain, so a file inside a non-last folder that is
//! itself inside a last folder gets a blank column followed by a bar.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, TreeError};
use crate::output::Glyph;

use super::order::{SiblingClassifier, SiblingOrder};
use super::utils::{depth_below, parent_dir};

/// Builds the decoration prefix for paths under a fixed root.
pub struct PrefixComposer {
    root: PathBuf,
    classifier: SiblingClassifier,
}

impl PrefixComposer {
    pub fn new(root: impl Into<PathBuf>, classifier: SiblingClassifier) -> Self {
        Self {
            root: root.into(),
            classifier,
        }
    }

    /// Full prefix for `path`: ancestor columns followed by its own branch glyph.
    pub fn compose(&mut self, path: &Path) -> Result<String> {
        let depth = depth_below(&self.root, path).ok_or_else(|| TreeError::OutsideRoot {
            path: path.to_path_buf(),
            root: self.root.clone(),
        })?;
        if depth == 0 {
            return Ok(String::new());
        }

        let order = self.known_order(path)?;
        let mut prefix = self.ancestor_prefix(path, depth - 1)?;
        prefix.push_str(Glyph::branch(order).as_str());
        Ok(prefix)
    }

    /// Indent columns for the `levels` ancestors above `path`, outermost first.
    pub fn ancestor_prefix(&mut self, path: &Path, levels: usize) -> Result<String> {
        if levels == 0 {
            return Ok(String::new());
        }

        let leaf = parent_dir(path);
        let mut prefix = self.ancestor_prefix(leaf, levels - 1)?;
        let order = self.known_order(leaf)?;
        prefix.push_str(Glyph::indent(order).as_str());
        Ok(prefix)
    }

    fn known_order(&mut self, path: &Path) -> Result<SiblingOrder> {
        match self.classifier.classify(path)? {
            SiblingOrder::Unknown => {
                debug!("no sibling position for {}", path.display());
                Err(TreeError::UnknownPosition {
                    path: path.to_path_buf(),
                    parent: parent_dir(path).to_path_buf(),
                })
            }
            order => Ok(order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_tree(paths: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for p in paths {
            let full = dir.path().join(p);
            if p.ends_with('/') {
                fs::create_dir_all(&full).unwrap();
            } else {
                fs::create_dir_all(full.parent().unwrap()).unwrap();
                fs::write(&full, "").unwrap();
            }
        }
        dir
    }

    fn composer(dir: &TempDir) -> PrefixComposer {
        PrefixComposer::new(dir.path(), SiblingClassifier::new(false))
    }

    #[test]
    fn test_top_level_entries_have_no_ancestor_columns() {
        let dir = make_tree(&["a.txt", "b.txt"]);
        let mut c = composer(&dir);
        assert_eq!(c.compose(&dir.path().join("a.txt")).unwrap(), "├───");
        assert_eq!(c.compose(&dir.path().join("b.txt")).unwrap(), "└───");
    }

    #[test]
    fn test_sole_child_of_last_dir_gets_blank_column() {
        let dir = make_tree(&["sub/only.txt"]);
        let mut c = composer(&dir);
        assert_eq!(c.compose(&dir.path().join("sub")).unwrap(), "└───");
        assert_eq!(
            c.compose(&dir.path().join("sub/only.txt")).unwrap(),
            "\t└───"
        );
    }

    #[test]
    fn test_child_of_non_last_dir_gets_bar_column() {
        let dir = make_tree(&["first/deep.txt", "last.txt", "middle.txt"]);
        let mut c = composer(&dir);
        assert_eq!(
            c.compose(&dir.path().join("first/deep.txt")).unwrap(),
            "│\t└───"
        );
    }

    #[test]
    fn test_nested_columns_resolve_each_ancestor() {
        // z is the last top-level entry, z/a is not last within z
        let dir = make_tree(&["a.txt", "z/a/file.txt", "z/b.txt"]);
        let mut c = composer(&dir);
        assert_eq!(
            c.compose(&dir.path().join("z/a/file.txt")).unwrap(),
            "\t│\t└───"
        );
        assert_eq!(c.compose(&dir.path().join("z/b.txt")).unwrap(), "\t└───");
    }

    #[test]
    fn test_ancestor_column_count_is_depth_minus_one() {
        let dir = make_tree(&["a/b/c/d/leaf.txt"]);
        let mut c = composer(&dir);
        let leaf = dir.path().join("a/b/c/d/leaf.txt");
        let ancestors = c.ancestor_prefix(&leaf, 4).unwrap();
        assert_eq!(ancestors, "\t\t\t\t");
        assert_eq!(c.compose(&leaf).unwrap(), "\t\t\t\t└───");
    }

    #[test]
    fn test_root_itself_has_empty_prefix() {
        let dir = make_tree(&["a.txt"]);
        let mut c = composer(&dir);
        assert_eq!(c.compose(dir.path()).unwrap(), "");
    }

    #[test]
    fn test_path_outside_root_is_rejected() {
        let dir = make_tree(&["inner/a.txt"]);
        let mut c = PrefixComposer::new(dir.path().join("inner"), SiblingClassifier::new(false));
        let err = c.compose(&dir.path().join("a.txt")).unwrap_err();
        assert!(matches!(err, TreeError::OutsideRoot { .. }), "got {err}");
    }

    #[test]
    fn test_missing_entry_reports_unknown_position() {
        let dir = make_tree(&["a.txt"]);
        let mut c = composer(&dir);
        let err = c.compose(&dir.path().join("ghost.txt")).unwrap_err();
        assert!(matches!(err, TreeError::UnknownPosition { .. }), "got {err}");
    }

    #[test]
    fn test_missing_ancestor_dir_is_directory_read_error() {
        let dir = make_tree(&["a.txt"]);
        let mut c = composer(&dir);
        let err = c.compose(&dir.path().join("gone/sub/x.txt")).unwrap_err();
        assert!(matches!(err, TreeError::DirectoryRead { .. }), "got {err}");
    }
}
