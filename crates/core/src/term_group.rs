//! Ordered products of units.

use serde::Serialize;
use tracing::trace;

use crate::error::{EquationError, Result};
use crate::unit::Unit;

/// An ordered, non-empty sequence of [`Unit`]s combined by multiplication.
///
/// The order is significant: it defines the positional index a
/// [`Target`](crate::Target) uses to address a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermGroup {
    units: Vec<Unit>,
}

impl TermGroup {
    /// Create a group from an ordered list of units.
    ///
    /// # Errors
    /// [`EquationError::EmptyGroup`] if `units` is empty.
    pub fn new(units: impl Into<Vec<Unit>>) -> Result<Self> {
        let units = units.into();
        if units.is_empty() {
            return Err(EquationError::EmptyGroup);
        }
        Ok(TermGroup { units })
    }

    /// Units in order
    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Number of units in the group
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false for a constructed group; provided for API completeness
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Position of `unit` in the group, if present
    pub fn position(&self, unit: &Unit) -> Option<usize> {
        self.units.iter().position(|u| u == unit)
    }

    /// Multiply all values together, respecting each unit's transform.
    ///
    /// `values` must hold exactly one value per unit, in group order.
    ///
    /// # Errors
    /// [`EquationError::InvalidArity`] if `values.len()` differs from the group size.
    pub fn evaluate(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.units.len() {
            return Err(EquationError::InvalidArity {
                expected: self.units.len(),
                actual: values.len(),
            });
        }

        Ok(product(self.units.iter(), values))
    }

    /// Solve for the unit at `index` given every other unit's value and the total.
    ///
    /// `given` holds the values of all units except the one at `index`, in the
    /// group's relative order (the target slot is omitted, not zeroed). A NaN
    /// result, e.g. from `0 / 0` on an incompletely filled form, yields `0.0`.
    ///
    /// # Errors
    /// - [`EquationError::IndexOutOfRange`] if `index` is not a valid position.
    /// - [`EquationError::InvalidArity`] if `given.len()` is not the group size minus one.
    pub fn solve_for(&self, index: usize, given: &[f64], total: f64) -> Result<f64> {
        let Some(unit) = self.units.get(index) else {
            return Err(EquationError::IndexOutOfRange {
                index,
                len: self.units.len(),
            });
        };
        if given.len() + 1 != self.units.len() {
            return Err(EquationError::InvalidArity {
                expected: self.units.len() - 1,
                actual: given.len(),
            });
        }

        let others = self
            .units
            .iter()
            .enumerate()
            .filter_map(|(i, u)| (i != index).then_some(u));
        let other_total = product(others, given);

        let result = unit.unit_for_value(total / other_total);
        if result.is_nan() {
            trace!(
                unit = %unit,
                total,
                other_total,
                "degenerate solve, falling back to 0"
            );
            return Ok(0.0);
        }
        Ok(result)
    }
}

/// Left fold of forward-transformed values, seeded with the multiplicative identity
fn product<'a>(units: impl Iterator<Item = &'a Unit>, values: &[f64]) -> f64 {
    units
        .zip(values)
        .fold(1.0, |acc, (unit, &value)| acc * unit.value_for_unit(value))
}
