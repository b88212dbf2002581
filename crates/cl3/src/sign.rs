//! Sign of an entry in the multiplication table.

use crate::Float;

/// Positive or negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive
    #[default]
    Pos = 0,
    /// Negative
    Neg = 1,
}

impl Sign {
    /// Returns `1.0` or `-1.0`. Usable in constant expressions.
    pub const fn to_float(self) -> Float {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }
}
