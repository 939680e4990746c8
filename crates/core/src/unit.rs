//! Named physical quantities and the transforms that let them enter an equation
//! non-linearly.
//!
//! A [`Unit`] is a small `Copy` value: display strings for the formula and the
//! unit label, an enumerated [`Quantity`] identifier, and a [`Transform`] that maps
//! the quantity's natural value to its contribution in a product (and back).
//!
//! # Usage
//! ```
//! use equation_core::Unit;
//!
//! let v2 = Unit::VOLTAGE.squared();
//! assert_eq!(v2.equation_symbol(), "V^2");
//! assert_eq!(v2.value_for_unit(3.0), 9.0);
//! assert_eq!(v2.unit_for_value(9.0), 3.0);
//! assert_ne!(v2, Unit::VOLTAGE);
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of the physical quantity a unit measures.
///
/// Identity is explicit rather than derived from display text, so two quantities
/// that happen to share a symbol (charge `Q` vs a custom `Q`) never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Work done / energy
    Work,
    /// Potential difference
    Voltage,
    /// Electric current
    Current,
    /// Electric charge
    Charge,
    /// Power
    Power,
    /// Time
    Time,
    /// Electrical resistance
    Resistance,
    /// Electrical resistivity
    Resistivity,
    /// Length
    Length,
    /// Cross sectional area
    Area,
    /// Caller-defined quantity outside the built-in catalog
    Custom(u16),
}

/// Invertible value transform applied to a unit inside a term group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transform {
    /// Value enters the product unchanged
    #[default]
    Identity,
    /// Value enters the product squared
    Squared,
}

impl Transform {
    /// Natural value -> contribution to the product
    #[inline]
    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        match self {
            Transform::Identity => value,
            Transform::Squared => value * value,
        }
    }

    /// Contribution to the product -> natural value.
    /// `Squared` returns the principal (non-negative) root; negative inputs give NaN.
    #[inline]
    #[must_use]
    pub fn inverse(self, value: f64) -> f64 {
        match self {
            Transform::Identity => value,
            Transform::Squared => value.sqrt(),
        }
    }

    /// Exponent appended to the equation symbol, if any
    #[inline]
    #[must_use]
    pub const fn exponent(self) -> Option<&'static str> {
        match self {
            Transform::Identity => None,
            Transform::Squared => Some("2"),
        }
    }
}

/// A unit, like volts or current.
///
/// Equality and hashing only consider the [`Quantity`] and the [`Transform`]; the
/// display strings are presentation data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Unit {
    quantity: Quantity,
    /// Symbol as written in the formula, before any exponent
    symbol: &'static str,
    #[serde(rename = "unit_symbol")]
    measure: &'static str,
    #[serde(rename = "unit_name")]
    name: &'static str,
    #[serde(rename = "unit_purpose")]
    purpose: &'static str,
    transform: Transform,
}

impl Unit {
    /// Work done, in joules
    pub const WORK: Unit = Unit::new(Quantity::Work, "W", "J", "Joules", "Work Done");

    /// Potential difference, in volts
    pub const VOLTAGE: Unit =
        Unit::new(Quantity::Voltage, "V", "V", "Volts", "Potential Difference");

    /// Current, in amperes
    pub const CURRENT: Unit = Unit::new(Quantity::Current, "I", "A", "Ampere", "Current");

    /// Charge, in coulombs
    pub const CHARGE: Unit = Unit::new(Quantity::Charge, "Q", "C", "Coulombs", "Charge");

    /// Power, in watts
    pub const POWER: Unit = Unit::new(Quantity::Power, "P", "W", "Watts", "Power");

    /// Time, in seconds
    pub const TIME: Unit = Unit::new(Quantity::Time, "T", "s", "Seconds", "Time");

    /// Resistance, in ohms
    pub const RESISTANCE: Unit =
        Unit::new(Quantity::Resistance, "R", "Ω", "Ohms", "Resistance");

    /// Resistivity, in ohm meters
    pub const RESISTIVITY: Unit = Unit::new(
        Quantity::Resistivity,
        "ρ",
        "Ωm",
        "Ohm Meters",
        "Resistivity",
    );

    /// Length, in meters
    pub const LENGTH: Unit = Unit::new(Quantity::Length, "l", "m", "Meters", "Length");

    /// Cross sectional area, in square meters
    pub const AREA: Unit = Unit::new(
        Quantity::Area,
        "A",
        "m^2",
        "Meters Squared",
        "Cross Sectional Area",
    );

    /// Every built-in unit, untransformed
    pub const ALL: [Unit; 10] = [
        Unit::WORK,
        Unit::VOLTAGE,
        Unit::CURRENT,
        Unit::CHARGE,
        Unit::POWER,
        Unit::TIME,
        Unit::RESISTANCE,
        Unit::RESISTIVITY,
        Unit::LENGTH,
        Unit::AREA,
    ];

    /// Create an untransformed unit
    #[must_use]
    pub const fn new(
        quantity: Quantity,
        symbol: &'static str,
        unit_symbol: &'static str,
        unit_name: &'static str,
        unit_purpose: &'static str,
    ) -> Self {
        Unit {
            quantity,
            symbol,
            measure: unit_symbol,
            name: unit_name,
            purpose: unit_purpose,
            transform: Transform::Identity,
        }
    }

    /// Squared variant of this unit, e.g. `Unit::VOLTAGE.squared()` is `V^2`.
    ///
    /// The exponent always applies to the untransformed symbol, so squaring an
    /// already squared unit gives the same unit back.
    #[must_use]
    pub const fn squared(self) -> Self {
        Unit {
            transform: Transform::Squared,
            ..self
        }
    }

    /// Quantity identifier
    #[inline]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Applied transform
    #[inline]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Symbol shown in the formula, including the exponent (`V^2`)
    pub fn equation_symbol(&self) -> Cow<'static, str> {
        match self.transform.exponent() {
            None => Cow::Borrowed(self.symbol),
            Some(exponent) => Cow::Owned(format!("{}^{exponent}", self.symbol)),
        }
    }

    /// Symbol shown in the formula, without any exponent (`V`)
    #[inline]
    pub const fn raw_symbol(&self) -> &'static str {
        self.symbol
    }

    /// Symbol of the measurement unit (`Ω`)
    #[inline]
    pub const fn unit_symbol(&self) -> &'static str {
        self.measure
    }

    /// Name of the measurement unit (`Ohms`)
    #[inline]
    pub const fn unit_name(&self) -> &'static str {
        self.name
    }

    /// What the quantity describes (`Resistance`)
    #[inline]
    pub const fn unit_purpose(&self) -> &'static str {
        self.purpose
    }

    /// Forward transform: this unit's natural value -> its contribution to a product.
    /// For `V^2`, takes volts and returns volts squared.
    #[inline]
    #[must_use]
    pub fn value_for_unit(&self, value: f64) -> f64 {
        self.transform.forward(value)
    }

    /// Inverse transform: a combined value -> this unit's natural value.
    /// For `V^2`, takes volts squared and returns volts.
    #[inline]
    #[must_use]
    pub fn unit_for_value(&self, value: f64) -> f64 {
        self.transform.inverse(value)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.quantity == other.quantity && self.transform == other.transform
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantity.hash(state);
        self.transform.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)?;
        if let Some(exponent) = self.transform.exponent() {
            write!(f, "^{exponent}")?;
        }
        Ok(())
    }
}
