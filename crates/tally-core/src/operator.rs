//! The closed set of binary arithmetic operator tags.

use std::fmt;

/// A binary arithmetic operation tag.
///
/// The set is closed and non-extensible: every value resolves to exactly
/// one of the four operations, so dispatch sites are checked exhaustively
/// at compile time. The only lossy boundary is [`Operator::from_symbol`],
/// which rejects unrecognized glyphs before a request can be formed —
/// there is no "unknown operator" case at evaluation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Wrapping two's-complement addition.
    Add,
    /// Wrapping two's-complement subtraction.
    Subtract,
    /// Wrapping two's-complement multiplication.
    Multiply,
    /// Truncating division. Fails on a zero divisor.
    Divide,
}

impl Operator {
    /// All operators, in glyph order (`+ - * /`).
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Parse a conventional operator glyph.
    ///
    /// Returns `None` for anything other than `+`, `-`, `*`, or `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tally_core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The conventional glyph for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
