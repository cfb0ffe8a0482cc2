//! dirtree - print a directory tree with nested connector glyphs

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{Glyph, StreamingFormatter, render_line};
pub use tree::{
    PrefixComposer, SiblingClassifier, SiblingOrder, TreeOutput, TreeWalker, WalkerConfig,
};
