//! Equation Core Library
//!
//! Solves two-group physical relations such as Ohm's law (`V = IR`) for any one
//! unknown quantity given the others.
//!
//! ## Building blocks
//!
//! - [`Unit`] - a named quantity with an optional invertible transform (squaring)
//! - [`TermGroup`] - an ordered product of units
//! - [`Equation`] - a numerator group equal to a denominator group
//! - [`Target`] - positional address of a unit inside an equation
//! - [`catalog`] - the built-in electrical equations
//!
//! Everything is an immutable value; all operations are pure and synchronous, so
//! equations can be shared across threads freely.
//!
//! ```
//! use equation_core::{EquationKind, Target, Unit, UnitValues};
//!
//! let pv2r = EquationKind::Pv2r.equation();
//! let mut values = UnitValues::default();
//! values.insert(Unit::POWER, 12.0);
//! values.insert(Unit::RESISTANCE, 3.0);
//! assert_eq!(pv2r.solve_by_value_map(Target::Top(0), &values), Ok(6.0));
//! ```

pub mod catalog;
pub mod equation;
pub mod error;
pub mod format;
pub mod target;
pub mod term_group;
pub mod unit;

pub use catalog::EquationKind;
pub use equation::{Equation, UnitValues};
pub use error::{EquationError, Result};
pub use target::Target;
pub use term_group::TermGroup;
pub use unit::{Quantity, Transform, Unit};
