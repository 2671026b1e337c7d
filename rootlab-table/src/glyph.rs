//! Box-drawing glyphs used for table borders.

pub const VERTICAL: char = '│';
pub const HORIZONTAL: char = '─';
pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';
pub const T_DOWN: char = '┬';
pub const T_UP: char = '┴';
pub const T_RIGHT: char = '├';
pub const T_LEFT: char = '┤';
pub const CROSS: char = '┼';

/// A horizontal rule and the glyphs at its left end, column joints, and right end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Top,
    Separator,
    Bottom,
}

impl Rule {
    /// Returns the `(left, joint, right)` glyphs for this rule.
    #[must_use]
    pub fn glyphs(self) -> (char, char, char) {
        match self {
            Rule::Top => (TOP_LEFT, T_DOWN, TOP_RIGHT),
            Rule::Separator => (T_RIGHT, CROSS, T_LEFT),
            Rule::Bottom => (BOTTOM_LEFT, T_UP, BOTTOM_RIGHT),
        }
    }
}
