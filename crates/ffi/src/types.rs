//! C-compatible mirrors of the core value types.

use equation_core::{Quantity, Target, Unit};

/// Which group of the equation a target addresses.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    /// Numerator group
    Top = 0,
    /// Denominator group
    Bottom = 1,
}

/// C layout of `equation_core::Target`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquationTarget {
    /// Group the unit lives in
    pub role: TargetRole,
    /// Zero-based position inside the group
    pub index: usize,
}

impl From<Target> for EquationTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Top(index) => EquationTarget {
                role: TargetRole::Top,
                index,
            },
            Target::Bottom(index) => EquationTarget {
                role: TargetRole::Bottom,
                index,
            },
        }
    }
}

impl From<EquationTarget> for Target {
    fn from(target: EquationTarget) -> Self {
        match target.role {
            TargetRole::Top => Target::Top(target.index),
            TargetRole::Bottom => Target::Bottom(target.index),
        }
    }
}

/// Built-in quantities that can be named across the FFI boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityCode {
    /// Work done (J)
    Work = 0,
    /// Potential difference (V)
    Voltage = 1,
    /// Current (A)
    Current = 2,
    /// Charge (C)
    Charge = 3,
    /// Power (W)
    Power = 4,
    /// Time (s)
    Time = 5,
    /// Resistance (Ω)
    Resistance = 6,
    /// Resistivity (Ωm)
    Resistivity = 7,
    /// Length (m)
    Length = 8,
    /// Cross sectional area (m^2)
    Area = 9,
}

impl QuantityCode {
    /// Built-in unit for this quantity, optionally squared
    pub(crate) fn unit(self, squared: bool) -> Unit {
        let unit = match self {
            QuantityCode::Work => Unit::WORK,
            QuantityCode::Voltage => Unit::VOLTAGE,
            QuantityCode::Current => Unit::CURRENT,
            QuantityCode::Charge => Unit::CHARGE,
            QuantityCode::Power => Unit::POWER,
            QuantityCode::Time => Unit::TIME,
            QuantityCode::Resistance => Unit::RESISTANCE,
            QuantityCode::Resistivity => Unit::RESISTIVITY,
            QuantityCode::Length => Unit::LENGTH,
            QuantityCode::Area => Unit::AREA,
        };
        if squared {
            unit.squared()
        } else {
            unit
        }
    }

    /// Code for a built-in quantity; `None` for caller-defined quantities
    pub(crate) fn from_quantity(quantity: Quantity) -> Option<Self> {
        Some(match quantity {
            Quantity::Work => QuantityCode::Work,
            Quantity::Voltage => QuantityCode::Voltage,
            Quantity::Current => QuantityCode::Current,
            Quantity::Charge => QuantityCode::Charge,
            Quantity::Power => QuantityCode::Power,
            Quantity::Time => QuantityCode::Time,
            Quantity::Resistance => QuantityCode::Resistance,
            Quantity::Resistivity => QuantityCode::Resistivity,
            Quantity::Length => QuantityCode::Length,
            Quantity::Area => QuantityCode::Area,
            Quantity::Custom(_) => return None,
        })
    }
}

/// One user-entered value, keyed by quantity and transform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitValue {
    /// Quantity the value belongs to
    pub quantity: QuantityCode,
    /// True for the squared variant of the quantity (e.g. `V^2`)
    pub squared: bool,
    /// The entered value, in the quantity's natural unit
    pub value: f64,
}

/// Identity of the unit at a target.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitKey {
    /// Quantity of the unit
    pub quantity: QuantityCode,
    /// True when the unit enters the equation squared
    pub squared: bool,
}

/// Text fields of a unit that can be copied out with `equation_unit_text`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitTextField {
    /// Symbol in the formula, caret exponent included (`V^2`)
    EquationSymbol = 0,
    /// Measurement unit symbol (`Ω`)
    UnitSymbol = 1,
    /// Measurement unit name (`Ohms`)
    UnitName = 2,
    /// Quantity description (`Resistance`)
    UnitPurpose = 3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use equation_core::Transform;

    #[test]
    fn test_target_conversion() {
        for target in [Target::Top(0), Target::Bottom(3)] {
            let c: EquationTarget = target.into();
            assert_eq!(Target::from(c), target);
        }
    }

    #[test]
    fn test_quantity_codes_cover_builtin_units() {
        for unit in Unit::ALL {
            let code = QuantityCode::from_quantity(unit.quantity()).unwrap();
            assert_eq!(code.unit(false), unit);
            assert_eq!(code.unit(true).transform(), Transform::Squared);
        }
        assert_eq!(QuantityCode::from_quantity(Quantity::Custom(4)), None);
    }
}
