//! Two term groups related by equality, and the solving entry points.
//!
//! An [`Equation`] reads `numerator-product = denominator-product`, e.g. `V = IR`
//! is the numerator `{V}` and the denominator `{I, R}`. Any single unit can be
//! solved for given the values of all the others.
//!
//! # Usage
//! ```
//! use equation_core::{Equation, Target, TermGroup, Unit, UnitValues};
//!
//! let vir = Equation::new(
//!     TermGroup::new([Unit::VOLTAGE]).unwrap(),
//!     TermGroup::new([Unit::CURRENT, Unit::RESISTANCE]).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(vir.to_string(), "V = IR");
//!
//! let mut values = UnitValues::default();
//! values.insert(Unit::VOLTAGE, 12.0);
//! values.insert(Unit::RESISTANCE, 3.0);
//! assert_eq!(vir.solve_by_unit(&Unit::CURRENT, &values), Ok(4.0));
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::ops::Index;
use tracing::debug;

use crate::error::{EquationError, Result};
use crate::target::Target;
use crate::term_group::TermGroup;
use crate::unit::Unit;

/// Sparse map of user supplied values keyed by unit. Missing units count as `0`.
pub type UnitValues = FxHashMap<Unit, f64>;

/// A numerator [`TermGroup`] equal to a denominator [`TermGroup`].
///
/// Immutable once built. No unit may appear in both groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    numerator: TermGroup,
    denominator: TermGroup,
    default_target: Option<Target>,
}

impl Equation {
    /// Relate two groups.
    ///
    /// # Errors
    /// [`EquationError::DuplicateUnit`] if a unit occurs in both groups.
    pub fn new(numerator: TermGroup, denominator: TermGroup) -> Result<Self> {
        if let Some(unit) = numerator
            .units()
            .iter()
            .find(|unit| denominator.position(unit).is_some())
        {
            return Err(EquationError::DuplicateUnit {
                symbol: unit.equation_symbol().into_owned(),
            });
        }

        Ok(Equation {
            numerator,
            denominator,
            default_target: None,
        })
    }

    /// Set the target [`Equation::normalize`] falls back to. Usually matches how the
    /// equation is written, e.g. `P` for `V^2 = PR`.
    ///
    /// # Errors
    /// [`EquationError::IndexOutOfRange`] if `target` does not address a unit.
    pub fn with_default_target(mut self, target: Target) -> Result<Self> {
        self.check(target)?;
        self.default_target = Some(target);
        Ok(self)
    }

    /// The numerator group
    #[inline]
    pub fn numerator(&self) -> &TermGroup {
        &self.numerator
    }

    /// The denominator group
    #[inline]
    pub fn denominator(&self) -> &TermGroup {
        &self.denominator
    }

    /// Target used when a stale target is normalized, if configured
    #[inline]
    pub fn default_target(&self) -> Option<Target> {
        self.default_target
    }

    fn group(&self, target: Target) -> &TermGroup {
        match target {
            Target::Top(_) => &self.numerator,
            Target::Bottom(_) => &self.denominator,
        }
    }

    fn check(&self, target: Target) -> Result<()> {
        let len = self.group(target).len();
        if target.index() < len {
            Ok(())
        } else {
            Err(EquationError::IndexOutOfRange {
                index: target.index(),
                len,
            })
        }
    }

    /// Unit playing the given role.
    ///
    /// # Errors
    /// [`EquationError::IndexOutOfRange`] if the target is out of bounds; pass
    /// targets through [`Equation::normalize`] first.
    pub fn resolve(&self, target: Target) -> Result<Unit> {
        self.check(target)?;
        Ok(self.group(target).units()[target.index()])
    }

    /// Make a possibly stale target safe to use with this equation.
    ///
    /// Returns `candidate` if it is in range, otherwise the default target, otherwise
    /// `Top(0)`. Call whenever the active equation changes while a target is held.
    pub fn normalize(&self, candidate: Target) -> Target {
        if self.check(candidate).is_ok() {
            candidate
        } else {
            self.default_target.unwrap_or_default()
        }
    }

    /// Role of `unit` in this equation. The numerator is searched first.
    pub fn position(&self, unit: &Unit) -> Option<Target> {
        self.numerator
            .position(unit)
            .map(Target::Top)
            .or_else(|| self.denominator.position(unit).map(Target::Bottom))
    }

    /// Solve for `target` from dense value slices.
    ///
    /// The group owning `target` must be given one value fewer than its size (the
    /// target's slot omitted); the opposing group must be given a value for every unit.
    ///
    /// # Errors
    /// - [`EquationError::IndexOutOfRange`] if `target` is out of bounds.
    /// - [`EquationError::ArityMismatch`] if the slices do not match the rule above.
    pub fn solve(
        &self,
        target: Target,
        numerator_values: &[f64],
        denominator_values: &[f64],
    ) -> Result<f64> {
        self.check(target)?;

        let (expected_top, expected_bottom) = match target {
            Target::Top(_) => (self.numerator.len() - 1, self.denominator.len()),
            Target::Bottom(_) => (self.numerator.len(), self.denominator.len() - 1),
        };
        if numerator_values.len() != expected_top || denominator_values.len() != expected_bottom {
            return Err(EquationError::ArityMismatch {
                target,
                numerator: numerator_values.len(),
                denominator: denominator_values.len(),
            });
        }

        debug!(equation = %self, %target, "solving");
        match target {
            Target::Top(index) => {
                let total = self.denominator.evaluate(denominator_values)?;
                self.numerator.solve_for(index, numerator_values, total)
            }
            Target::Bottom(index) => {
                let total = self.numerator.evaluate(numerator_values)?;
                self.denominator.solve_for(index, denominator_values, total)
            }
        }
    }

    /// Solve for `target`, reading every other unit's value from `values`.
    /// Units missing from the map count as `0`.
    ///
    /// # Errors
    /// [`EquationError::IndexOutOfRange`] if `target` is out of bounds.
    pub fn solve_by_value_map(&self, target: Target, values: &UnitValues) -> Result<f64> {
        let gather = |group: &TermGroup, skip: Option<usize>| -> Vec<f64> {
            group
                .units()
                .iter()
                .enumerate()
                .filter(|&(i, _)| Some(i) != skip)
                .map(|(_, unit)| values.get(unit).copied().unwrap_or(0.0))
                .collect()
        };

        let (top_skip, bottom_skip) = match target {
            Target::Top(index) => (Some(index), None),
            Target::Bottom(index) => (None, Some(index)),
        };
        let numerator_values = gather(&self.numerator, top_skip);
        let denominator_values = gather(&self.denominator, bottom_skip);

        self.solve(target, &numerator_values, &denominator_values)
    }

    /// Solve for `unit`, reading every other unit's value from `values`.
    ///
    /// # Errors
    /// [`EquationError::UnitNotFound`] if `unit` is in neither group.
    pub fn solve_by_unit(&self, unit: &Unit, values: &UnitValues) -> Result<f64> {
        let target = self
            .position(unit)
            .ok_or_else(|| EquationError::UnitNotFound {
                symbol: unit.equation_symbol().into_owned(),
            })?;
        self.solve_by_value_map(target, values)
    }

    /// Solve one target for many value maps in parallel. Results keep input order.
    ///
    /// # Errors
    /// [`EquationError::IndexOutOfRange`] if `target` is out of bounds.
    pub fn solve_batch(&self, target: Target, inputs: &[UnitValues]) -> Result<Vec<f64>> {
        self.check(target)?;
        inputs
            .par_iter()
            .map(|values| self.solve_by_value_map(target, values))
            .collect()
    }

    /// Every unit with its role: numerator units as `Top(i)`, then denominator
    /// units as `Bottom(i)`.
    pub fn flatten(&self) -> Vec<(Unit, Target)> {
        let top = self
            .numerator
            .units()
            .iter()
            .enumerate()
            .map(|(i, unit)| (*unit, Target::Top(i)));
        let bottom = self
            .denominator
            .units()
            .iter()
            .enumerate()
            .map(|(i, unit)| (*unit, Target::Bottom(i)));
        top.chain(bottom).collect()
    }

    /// Every valid target, in the same order as [`Equation::flatten`]
    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        (0..self.numerator.len())
            .map(Target::Top)
            .chain((0..self.denominator.len()).map(Target::Bottom))
    }
}

impl Index<Target> for Equation {
    type Output = Unit;

    /// Panics if `target` is out of range; see [`Equation::resolve`].
    fn index(&self, target: Target) -> &Unit {
        &self.group(target).units()[target.index()]
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.numerator.units() {
            write!(f, "{unit}")?;
        }
        f.write_str(" = ")?;
        for unit in self.denominator.units() {
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}
