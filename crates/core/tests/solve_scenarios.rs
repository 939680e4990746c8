//! End-to-end solving against the built-in catalog and hand-built equations.

mod common;

use equation_core::{
    Equation, EquationError, EquationKind, Target, TermGroup, Unit, UnitValues,
};

fn values(pairs: &[(Unit, f64)]) -> UnitValues {
    pairs.iter().copied().collect()
}

#[test]
fn test_ohms_law_current_from_voltage_and_resistance() {
    let eq = Equation::new(
        TermGroup::new([Unit::VOLTAGE]).unwrap(),
        TermGroup::new([Unit::CURRENT, Unit::RESISTANCE]).unwrap(),
    )
    .unwrap();

    // V = 12, R = 3 => I = 4
    assert_eq!(eq.solve(Target::Bottom(0), &[12.0], &[3.0]), Ok(4.0));
}

#[test]
fn test_squared_voltage_from_power_and_resistance() {
    let eq = Equation::new(
        TermGroup::new([Unit::VOLTAGE.squared()]).unwrap(),
        TermGroup::new([Unit::POWER, Unit::RESISTANCE]).unwrap(),
    )
    .unwrap();

    // P * R = 36 => V = 6
    assert_eq!(eq.solve(Target::Top(0), &[], &[12.0, 3.0]), Ok(6.0));
}

#[test]
fn test_empty_value_map_gives_zero_for_every_catalog_target() {
    let empty = UnitValues::default();
    for eq in equation_core::catalog::all() {
        for target in eq.targets() {
            assert_eq!(
                eq.solve_by_value_map(target, &empty),
                Ok(0.0),
                "{eq} solving {target}"
            );
        }
    }
}

#[test]
fn test_solve_by_foreign_unit_fails() {
    let eq = EquationKind::Vir.equation();
    let result = eq.solve_by_unit(&Unit::LENGTH, &values(&[(Unit::VOLTAGE, 1.0)]));
    assert_eq!(
        result,
        Err(EquationError::UnitNotFound {
            symbol: "l".to_string()
        })
    );
}

#[test]
fn test_normalize_after_switching_equation() {
    // Selection points at the second numerator unit of a two-unit numerator
    let resistivity = Equation::new(
        TermGroup::new([Unit::RESISTIVITY, Unit::LENGTH]).unwrap(),
        TermGroup::new([Unit::RESISTANCE, Unit::AREA]).unwrap(),
    )
    .unwrap();
    let selected = Target::Top(1);
    assert_eq!(resistivity.normalize(selected), selected);

    // Switching to single-unit numerators invalidates it
    assert_eq!(EquationKind::Vir.equation().normalize(selected), Target::Top(0));
    assert_eq!(
        EquationKind::Pv2r.equation().normalize(selected),
        Target::Bottom(0)
    );
    assert_eq!(
        EquationKind::Pv2r.equation().normalize(Target::Top(5)),
        Target::Bottom(0)
    );
}

#[test]
fn test_catalog_solves_by_unit() {
    let cases = [
        (
            EquationKind::Vir,
            Unit::RESISTANCE,
            vec![(Unit::VOLTAGE, 9.0), (Unit::CURRENT, 3.0)],
            3.0,
        ),
        (
            EquationKind::Qit,
            Unit::CHARGE,
            vec![(Unit::CURRENT, 2.0), (Unit::TIME, 30.0)],
            60.0,
        ),
        (
            EquationKind::Wpt,
            Unit::TIME,
            vec![(Unit::WORK, 500.0), (Unit::POWER, 50.0)],
            10.0,
        ),
        (
            EquationKind::Wqv,
            Unit::VOLTAGE,
            vec![(Unit::WORK, 24.0), (Unit::CHARGE, 2.0)],
            12.0,
        ),
        (
            EquationKind::Pvi,
            Unit::POWER,
            vec![(Unit::VOLTAGE, 230.0), (Unit::CURRENT, 2.0)],
            460.0,
        ),
        (
            EquationKind::Pv2r,
            Unit::RESISTANCE,
            vec![(Unit::VOLTAGE.squared(), 10.0), (Unit::POWER, 20.0)],
            5.0,
        ),
        (
            EquationKind::Pri2,
            Unit::CURRENT.squared(),
            vec![(Unit::POWER, 100.0), (Unit::RESISTANCE, 4.0)],
            5.0,
        ),
    ];

    for (kind, unknown, known, expected) in cases {
        let result = kind.equation().solve_by_unit(&unknown, &values(&known));
        assert_eq!(result, Ok(expected), "{kind}: solving for {unknown}");
    }
}

#[test]
fn test_catalog_is_shareable_across_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            std::thread::spawn(move || {
                let eq = EquationKind::Pvi.equation();
                eq.solve_by_unit(
                    &Unit::POWER,
                    &values(&[(Unit::VOLTAGE, f64::from(i)), (Unit::CURRENT, 2.0)]),
                )
            })
        })
        .collect();

    for (i, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(f64::from(i) * 2.0));
    }
}
