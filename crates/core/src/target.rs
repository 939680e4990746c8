//! Positional addressing of units inside an [`Equation`](crate::Equation)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a unit within an equation.
///
/// `Top(n)` is the n-th unit of the numerator group, `Bottom(n)` the n-th unit of
/// the denominator group. Indices are zero-based. A target is only meaningful for
/// the equation it was produced for; pass stale targets through
/// [`Equation::normalize`](crate::Equation::normalize) before dereferencing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Item n of the numerator
    Top(usize),
    /// Item n of the denominator
    Bottom(usize),
}

impl Target {
    /// Position within the owning group
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Target::Top(index) | Target::Bottom(index) => index,
        }
    }

    /// True when the target lives in the numerator
    #[inline]
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Target::Top(_))
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::Top(0)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Top(index) => write!(f, "top[{index}]"),
            Target::Bottom(index) => write!(f, "bottom[{index}]"),
        }
    }
}
