//! Connector glyphs drawn in front of each entry

use crate::tree::SiblingOrder;

/// One segment of a line's decoration prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Own connector when a later sibling follows.
    BranchContinue,
    /// Own connector for the last sibling.
    BranchEnd,
    /// Ancestor column that still has siblings below it.
    IndentContinue,
    /// Ancestor column that is finished.
    IndentBlank,
    Empty,
}

impl Glyph {
    pub const fn as_str(self) -> &'static str {
        match self {
            Glyph::BranchContinue => "├───",
            Glyph::BranchEnd => "└───",
            Glyph::IndentContinue => "│\t",
            Glyph::IndentBlank => "\t",
            Glyph::Empty => "",
        }
    }

    /// Connector for the entry itself.
    pub fn branch(order: SiblingOrder) -> Self {
        match order {
            SiblingOrder::First | SiblingOrder::Middle => Glyph::BranchContinue,
            SiblingOrder::Last => Glyph::BranchEnd,
            SiblingOrder::Unknown => Glyph::Empty,
        }
    }

    /// Column contributed by an ancestor directory.
    pub fn indent(order: SiblingOrder) -> Self {
        match order {
            SiblingOrder::First | SiblingOrder::Middle => Glyph::IndentContinue,
            SiblingOrder::Last => Glyph::IndentBlank,
            SiblingOrder::Unknown => Glyph::Empty,
        }
    }
}
