//! Error type shared by every fallible operation in the crate.
//!
//! All variants describe contract violations made by the caller (wrong number of
//! values, a target that does not exist, a unit that is not part of the equation).
//! Degenerate numeric results such as `0 / 0` are not errors; see
//! [`TermGroup::solve_for`](crate::TermGroup::solve_for).

use crate::target::Target;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EquationError>;

/// Errors that can occur while building or solving an equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    /// A term group received a value slice of the wrong length
    InvalidArity {
        /// Number of values the group expected
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
    /// The numerator/denominator value slices do not leave exactly one slot open for the target
    ArityMismatch {
        /// Target being solved for
        target: Target,
        /// Number of numerator values supplied
        numerator: usize,
        /// Number of denominator values supplied
        denominator: usize,
    },
    /// A target or index addresses a slot past the end of its group
    IndexOutOfRange {
        /// Offending position
        index: usize,
        /// Size of the addressed group
        len: usize,
    },
    /// The unit is in neither group of the equation
    UnitNotFound {
        /// Equation symbol of the missing unit
        symbol: String,
    },
    /// A term group was built without any units
    EmptyGroup,
    /// The same unit was placed in both the numerator and the denominator
    DuplicateUnit {
        /// Equation symbol of the duplicated unit
        symbol: String,
    },
}

impl std::fmt::Display for EquationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquationError::InvalidArity { expected, actual } => {
                write!(f, "Invalid arity: expected {expected} values, got {actual}")
            }
            EquationError::ArityMismatch {
                target,
                numerator,
                denominator,
            } => write!(
                f,
                "Arity mismatch solving for {target}: got {numerator} numerator and {denominator} denominator values"
            ),
            EquationError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for group of {len} units")
            }
            EquationError::UnitNotFound { symbol } => {
                write!(f, "Unit '{symbol}' is not part of this equation")
            }
            EquationError::EmptyGroup => write!(f, "Term group must contain at least one unit"),
            EquationError::DuplicateUnit { symbol } => {
                write!(f, "Unit '{symbol}' appears in both numerator and denominator")
            }
        }
    }
}

impl std::error::Error for EquationError {}
