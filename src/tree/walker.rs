//! TreeWalker - visits every non-hidden entry below a root and streams its line

use std::path::Path;

use ignore::WalkBuilder;
use log::{debug, warn};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::order::{SiblingClassifier, ensure_readable_dir};
use super::prefix::PrefixComposer;
use super::utils::{display_name, is_hidden_name};

/// Callback for streaming output - receives each decorated entry in walk order.
pub trait TreeOutput {
    fn output_node(&mut self, name: &str, prefix: &str) -> std::io::Result<()>;
}

/// Depth-first walker that decorates entries as it reaches them.
/// Nothing is collected in memory beyond the optional listing cache.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream one line per entry to `output`.
    /// Returns the number of lines written.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<usize> {
        // An unreadable root is fatal; later per-entry failures are only skipped.
        ensure_readable_dir(root)?;

        // Without files on screen, only directories count as siblings.
        let classifier = SiblingClassifier::new(self.config.memoize_listings)
            .with_dirs_only(!self.config.show_files);
        let mut composer = PrefixComposer::new(root, classifier);
        let mut written = 0usize;

        for result in build_walk(root) {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("{}", TreeError::Traversal(e));
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir && !self.config.show_files {
                continue;
            }

            let path = entry.path();
            let prefix = composer.compose(path)?;
            output.output_node(&display_name(path), &prefix)?;
            written += 1;
        }

        debug!("walk of {} finished: {} entries", root.display(), written);
        Ok(written)
    }
}

/// Sorted depth-first walk that skips hidden entries and never descends into them.
/// Ignore files are not consulted and symlinks are not followed.
fn build_walk(root: &Path) -> ignore::Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_name(entry.file_name()))
        .build()
}
