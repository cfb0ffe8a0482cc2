//! Sibling-position classification
//!
//! A path's position among its siblings is read from the live listing of its
//! parent directory. Listings are sorted by file name so the classification
//! agrees with the order the walker visits entries in.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use log::trace;

use crate::error::{Result, TreeError};

use super::utils::parent_dir;

/// Position of a path within its parent's directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingOrder {
    First,
    Middle,
    /// Last of one or more entries, including a sole child.
    Last,
    /// Not present in the parent's listing.
    Unknown,
}

impl SiblingOrder {
    /// Classify `name` against an already sorted listing.
    ///
    /// The index-0 check runs before the last-index check, so a sole entry is
    /// always `Last`.
    pub fn from_listing(listing: &[OsString], name: &std::ffi::OsStr) -> Self {
        match listing.iter().position(|entry| entry == name) {
            Some(0) if listing.len() > 1 => SiblingOrder::First,
            Some(0) => SiblingOrder::Last,
            Some(i) if i == listing.len() - 1 => SiblingOrder::Last,
            Some(_) => SiblingOrder::Middle,
            None => SiblingOrder::Unknown,
        }
    }
}

impl fmt::Display for SiblingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SiblingOrder::First => "First",
            SiblingOrder::Middle => "Middle",
            SiblingOrder::Last => "Last",
            SiblingOrder::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Reads parent listings and classifies paths against them.
///
/// With memoization enabled each directory is listed at most once per
/// classifier; otherwise every call re-reads the directory.
#[derive(Debug, Default)]
pub struct SiblingClassifier {
    cache: Option<HashMap<PathBuf, Vec<OsString>>>,
    dirs_only: bool,
}

impl SiblingClassifier {
    pub fn new(memoize: bool) -> Self {
        Self {
            cache: memoize.then(HashMap::new),
            dirs_only: false,
        }
    }

    /// Count only subdirectories as siblings, for trees that print no files.
    pub fn with_dirs_only(mut self, dirs_only: bool) -> Self {
        self.dirs_only = dirs_only;
        self
    }

    /// Classify `path` within the listing of its parent directory.
    pub fn classify(&mut self, path: &Path) -> Result<SiblingOrder> {
        let parent = parent_dir(path);
        let Some(name) = path.file_name() else {
            return Ok(SiblingOrder::Unknown);
        };

        let order = match self.cache.as_mut() {
            Some(cache) => {
                if !cache.contains_key(parent) {
                    let listing = read_listing(parent, self.dirs_only)?;
                    cache.insert(parent.to_path_buf(), listing);
                }
                let listing = &cache[parent];
                SiblingOrder::from_listing(listing, name)
            }
            None => SiblingOrder::from_listing(&read_listing(parent, self.dirs_only)?, name),
        };

        trace!("{} is {} in {}", path.display(), order, parent.display());
        Ok(order)
    }
}

/// Read every entry name of `dir`, hidden entries included, sorted by name.
pub fn read_sorted_listing(dir: &Path) -> Result<Vec<OsString>> {
    read_listing(dir, false)
}

/// Read the names of the subdirectories of `dir`, sorted by name.
/// Symlinks are not followed, so a link to a directory is not counted.
pub fn read_sorted_dir_listing(dir: &Path) -> Result<Vec<OsString>> {
    read_listing(dir, true)
}

/// Open `dir` for reading without listing it.
pub fn ensure_readable_dir(dir: &Path) -> Result<()> {
    std::fs::read_dir(dir)
        .map(drop)
        .map_err(|source| TreeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })
}

fn read_listing(dir: &Path, dirs_only: bool) -> Result<Vec<OsString>> {
    let map_err = |source| TreeError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(map_err)? {
        let entry = entry.map_err(map_err)?;
        if dirs_only && !entry.file_type().map_err(map_err)?.is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}
