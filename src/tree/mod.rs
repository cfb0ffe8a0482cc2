//! Directory tree walking logic
//!
//! - `TreeWalker`: walks the subtree and streams each entry to a `TreeOutput`
//! - `SiblingClassifier`: finds an entry's position among its siblings
//! - `PrefixComposer`: turns ancestor positions into the connector prefix

mod config;
mod order;
mod prefix;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use order::{
    SiblingClassifier, SiblingOrder, ensure_readable_dir, read_sorted_dir_listing,
    read_sorted_listing,
};
pub use prefix::PrefixComposer;
pub use walker::{TreeOutput, TreeWalker};
