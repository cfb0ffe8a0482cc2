//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Print plain files alongside directories. Set by `-f`; also the default.
    pub show_files: bool,
    /// Cache each directory listing for the duration of one walk.
    /// Output is identical to re-reading; only the number of reads changes.
    pub memoize_listings: bool,
}

impl WalkerConfig {
    /// Only directories are printed, and only directories count as siblings.
    pub fn dirs_only() -> Self {
        Self {
            show_files: false,
            ..Default::default()
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            show_files: true, // default behavior: print everything
            memoize_listings: false,
        }
    }
}
