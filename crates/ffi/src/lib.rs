//! C ABI for the equation solver.
//!
//! Exposes the built-in catalog, target normalization and solving to presentation
//! layers written in other languages. Every fallible function returns an
//! `EquationErrorCode`; details of the last failure on the calling thread are
//! available through `equation_get_last_error`.

pub mod catalog;
pub mod error;
mod helpers;
pub mod solve;
pub mod types;

pub use error::EquationErrorCode;
pub use types::{EquationTarget, QuantityCode, TargetRole, UnitKey, UnitTextField, UnitValue};
