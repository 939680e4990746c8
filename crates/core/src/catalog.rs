//! Built-in equations relating the [`Unit`] constants.
//!
//! The catalog is static configuration: it is built once on first access and is
//! read-only afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::info;

use crate::equation::Equation;
use crate::target::Target;
use crate::term_group::TermGroup;
use crate::unit::Unit;

/// Names of the built-in equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationKind {
    /// Ohm's law, `V = IR`
    Vir,
    /// `Q = IT`
    Qit,
    /// `W = PT`
    Wpt,
    /// `W = QV`
    Wqv,
    /// `P = VI`
    Pvi,
    /// `V^2 = PR`
    Pv2r,
    /// `P = RI^2`
    Pri2,
}

impl EquationKind {
    /// Every built-in equation, in catalog order
    pub const ALL: [EquationKind; 7] = [
        EquationKind::Vir,
        EquationKind::Qit,
        EquationKind::Wpt,
        EquationKind::Wqv,
        EquationKind::Pvi,
        EquationKind::Pv2r,
        EquationKind::Pri2,
    ];

    /// Short lowercase name (`vir`)
    pub const fn name(self) -> &'static str {
        match self {
            EquationKind::Vir => "vir",
            EquationKind::Qit => "qit",
            EquationKind::Wpt => "wpt",
            EquationKind::Wqv => "wqv",
            EquationKind::Pvi => "pvi",
            EquationKind::Pv2r => "pv2r",
            EquationKind::Pri2 => "pri2",
        }
    }

    /// The equation this kind names
    pub fn equation(self) -> &'static Equation {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquationKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = EquationKind::ALL.into_iter().map(EquationKind::name).collect();
                format!("unknown equation '{s}', expected one of: {}", names.join(", "))
            })
    }
}

fn build(top: &[Unit], bottom: &[Unit], default_target: Option<Target>) -> Equation {
    let equation = TermGroup::new(top.to_vec())
        .and_then(|top| Equation::new(top, TermGroup::new(bottom.to_vec())?))
        .and_then(|eq| match default_target {
            Some(target) => eq.with_default_target(target),
            None => Ok(eq),
        });
    equation.unwrap_or_else(|err| panic!("invalid built-in equation: {err}"))
}

static CATALOG: LazyLock<[Equation; 7]> = LazyLock::new(|| {
    let catalog = [
        build(&[Unit::VOLTAGE], &[Unit::CURRENT, Unit::RESISTANCE], None),
        build(&[Unit::CHARGE], &[Unit::CURRENT, Unit::TIME], None),
        build(&[Unit::WORK], &[Unit::POWER, Unit::TIME], None),
        build(&[Unit::WORK], &[Unit::CHARGE, Unit::VOLTAGE], None),
        build(&[Unit::POWER], &[Unit::VOLTAGE, Unit::CURRENT], None),
        build(
            &[Unit::VOLTAGE.squared()],
            &[Unit::POWER, Unit::RESISTANCE],
            Some(Target::Bottom(0)),
        ),
        build(
            &[Unit::POWER],
            &[Unit::RESISTANCE, Unit::CURRENT.squared()],
            None,
        ),
    ];
    info!(count = catalog.len(), "built equation catalog");
    catalog
});

/// Every built-in equation, in catalog order
pub fn all() -> &'static [Equation] {
    CATALOG.as_slice()
}

/// Look up a built-in unit by equation symbol, including squared forms (`V^2`).
/// `rho` is accepted for `ρ`.
pub fn unit_by_symbol(symbol: &str) -> Option<Unit> {
    let symbol = symbol.trim();
    let (base, squared) = match crate::format::split_exponent(symbol) {
        (base, None) => (base, false),
        (base, Some("2")) => (base, true),
        (_, Some(_)) => return None,
    };
    let base = if base == "rho" { "ρ" } else { base };

    Unit::ALL
        .into_iter()
        .find(|unit| unit.raw_symbol() == base)
        .map(|unit| if squared { unit.squared() } else { unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_descriptions() {
        let descriptions: Vec<String> = all().iter().map(ToString::to_string).collect();
        assert_eq!(
            descriptions,
            vec![
                "V = IR", "Q = IT", "W = PT", "W = QV", "P = VI", "V^2 = PR", "P = RI^2"
            ]
        );
    }

    #[test]
    fn test_kind_indexes_catalog() {
        for (kind, equation) in EquationKind::ALL.into_iter().zip(all()) {
            assert_eq!(kind.equation(), equation);
        }
    }

    #[test]
    fn test_default_targets() {
        assert_eq!(
            EquationKind::Pv2r.equation().default_target(),
            Some(Target::Bottom(0))
        );
        assert_eq!(EquationKind::Vir.equation().default_target(), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("PV2R".parse::<EquationKind>(), Ok(EquationKind::Pv2r));
        assert_eq!("vir".parse::<EquationKind>(), Ok(EquationKind::Vir));
        assert!("xyz".parse::<EquationKind>().is_err());
    }

    #[test]
    fn test_unit_by_symbol() {
        assert_eq!(unit_by_symbol("V"), Some(Unit::VOLTAGE));
        assert_eq!(unit_by_symbol("I^2"), Some(Unit::CURRENT.squared()));
        assert_eq!(unit_by_symbol("rho"), Some(Unit::RESISTIVITY));
        assert_eq!(unit_by_symbol("ρ"), Some(Unit::RESISTIVITY));
        assert_eq!(unit_by_symbol("V^3"), None);
        assert_eq!(unit_by_symbol("Z"), None);
    }
}
