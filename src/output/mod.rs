//! Tree line rendering
//!
//! - `glyphs` - the connector segments a prefix is built from
//! - `streaming` - writes each decorated line as soon as it is visited

mod glyphs;
mod streaming;

pub use glyphs::Glyph;
pub use streaming::{StreamingFormatter, render_line};
