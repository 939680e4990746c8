//! Randomised checks that solving inverts evaluation.

mod common;

use approx::assert_relative_eq;
use equation_core::{TermGroup, Unit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn groups() -> Vec<TermGroup> {
    vec![
        TermGroup::new([Unit::VOLTAGE.squared()]).unwrap(),
        TermGroup::new([Unit::CURRENT, Unit::RESISTANCE]).unwrap(),
        TermGroup::new([Unit::RESISTANCE, Unit::CURRENT.squared()]).unwrap(),
        TermGroup::new([Unit::RESISTIVITY, Unit::LENGTH, Unit::TIME.squared()]).unwrap(),
    ]
}

#[test]
fn test_evaluate_is_product_of_forward_transforms() {
    let mut rng = StdRng::seed_from_u64(7);
    for group in groups() {
        for _ in 0..SAMPLES {
            let values: Vec<f64> = (0..group.len())
                .map(|_| rng.random_range(-50.0..50.0))
                .collect();
            let expected: f64 = group
                .units()
                .iter()
                .zip(&values)
                .map(|(unit, &v)| unit.value_for_unit(v))
                .product();
            assert_relative_eq!(
                group.evaluate(&values).unwrap(),
                expected,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_solve_for_inverts_evaluate() {
    let mut rng = StdRng::seed_from_u64(42);
    for group in groups() {
        for _ in 0..SAMPLES {
            // Positive values so squared units invert to the same root
            let values: Vec<f64> = (0..group.len())
                .map(|_| rng.random_range(0.01..1000.0))
                .collect();
            let total = group.evaluate(&values).unwrap();

            for index in 0..group.len() {
                let given: Vec<f64> = values
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != index)
                    .map(|(_, &v)| v)
                    .collect();
                let solved = group.solve_for(index, &given, total).unwrap();
                assert_relative_eq!(solved, values[index], max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn test_squared_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    for unit in Unit::ALL {
        let squared = unit.squared();
        for _ in 0..SAMPLES {
            let x: f64 = rng.random_range(0.0..1.0e6);
            assert_relative_eq!(
                squared.unit_for_value(squared.value_for_unit(x)),
                x,
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn test_all_zero_inputs_never_produce_nan() {
    for group in groups() {
        let given = vec![0.0; group.len() - 1];
        for index in 0..group.len() {
            let solved = group.solve_for(index, &given, 0.0).unwrap();
            assert_eq!(solved, 0.0, "index {index} of a {}-unit group", group.len());
        }
    }
}
