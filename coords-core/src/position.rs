//! Tagged position values
//!
//! A position is exactly one of an integer, a real, or a boolean,
//! discriminated by `PositionTag`. The enum payload binds the tag and the
//! value structurally, so a mismatched pairing cannot be constructed.

use std::fmt;

/// Discriminator for the three position alternatives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionTag {
    /// Platform-width signed integer component
    Integer,
    /// Double-precision component
    Real,
    /// Boolean component
    Boolean,
}

impl PositionTag {
    /// Get the string name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionTag::Integer => "integer",
            PositionTag::Real => "real",
            PositionTag::Boolean => "boolean",
        }
    }
}

/// A single coordinate component
///
/// Equality is structural: IEEE-754 semantics for `Real` (NaN is unequal to
/// itself), exact for the other variants, always false across variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Integer component
    Integer(isize),
    /// Real component
    Real(f64),
    /// Boolean component
    Boolean(bool),
}

impl Position {
    /// The active variant tag
    #[inline]
    pub fn tag(&self) -> PositionTag {
        match self {
            Position::Integer(_) => PositionTag::Integer,
            Position::Real(_) => PositionTag::Real,
            Position::Boolean(_) => PositionTag::Boolean,
        }
    }

    // ==================== Type predicates ====================

    /// Is the integer variant active
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Position::Integer(_))
    }

    /// Is the real variant active
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Position::Real(_))
    }

    /// Is the boolean variant active
    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Position::Boolean(_))
    }

    /// Is a numeric variant (integer or real) active
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Position::Integer(_) | Position::Real(_))
    }

    // ==================== Unwrap methods ====================

    /// Unwrap as integer
    #[inline]
    pub fn as_integer(&self) -> Option<isize> {
        match self {
            Position::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Unwrap as real
    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Position::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// Unwrap as boolean
    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Position::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of the payload: the integer payload widened to `f64`,
    /// the real payload as-is, none for booleans
    #[inline]
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Position::Integer(n) => Some(*n as f64),
            Position::Real(x) => Some(*x),
            Position::Boolean(_) => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Integer(n) => write!(f, "{n}"),
            Position::Real(x) => write!(f, "{x}"),
            Position::Boolean(b) => write!(f, "{b}"),
        }
    }
}
