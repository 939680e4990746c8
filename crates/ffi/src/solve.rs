//! FFI solving entry points.
//!
//! A presentation layer typically keeps the selected `EquationTarget` plus a sparse
//! array of `UnitValue`s the user has entered, calls `equation_normalize_target`
//! whenever the active equation changes, and `equation_solve_values` whenever an
//! input changes.

use equation_core::{Target, UnitValues};

use crate::error::{DefaultEquationError, EquationErrorCode};
use crate::helpers::{
    catalog_equation, clear_last_error, slice_from_raw, track_error, track_result,
};
use crate::types::{EquationTarget, UnitValue};

/// Make a possibly stale target safe for `equation`.
///
/// Writes `candidate` back unchanged when it addresses a unit, otherwise the
/// equation's default target, otherwise `Top(0)`.
///
/// # Safety
/// `out_target` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_normalize_target(
    equation: usize,
    candidate: EquationTarget,
    out_target: *mut EquationTarget,
) -> EquationErrorCode {
    if out_target.is_null() {
        return track_error(&DefaultEquationError::null_pointer("out_target"));
    }
    let eq = match track_result(catalog_equation(equation)) {
        Ok(eq) => eq,
        Err(code) => return code,
    };

    // SAFETY: checked non-null above.
    unsafe {
        *out_target = eq.normalize(candidate.into()).into();
    }
    clear_last_error();
    EquationErrorCode::Ok
}

/// Solve for `target` from dense value arrays.
///
/// The array for the target's group omits the target's slot (length = group size - 1);
/// the other array supplies every unit of its group, in group order.
///
/// # Returns
/// - `Ok` with the solution in `out_value`
/// - `ArityMismatch` if the array lengths do not fit the rule above
/// - `IndexOutOfRange` if `target` is stale; normalize it first
///
/// # Safety
/// - `numerator`/`denominator` must point to the given number of `double`s (null is
///   allowed for a length of zero).
/// - `out_value` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_solve(
    equation: usize,
    target: EquationTarget,
    numerator: *const f64,
    numerator_len: usize,
    denominator: *const f64,
    denominator_len: usize,
    out_value: *mut f64,
) -> EquationErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultEquationError::null_pointer("out_value"));
    }

    // SAFETY: forwarded caller contract for both arrays.
    let inputs = unsafe {
        slice_from_raw(numerator, numerator_len, "numerator").and_then(|top| {
            slice_from_raw(denominator, denominator_len, "denominator").map(|bottom| (top, bottom))
        })
    };
    let (top, bottom) = match track_result(inputs) {
        Ok(inputs) => inputs,
        Err(code) => return code,
    };

    let solved = track_result(catalog_equation(equation))
        .and_then(|eq| track_result(eq.solve(Target::from(target), top, bottom)));
    match solved {
        Ok(value) => {
            // SAFETY: checked non-null above.
            unsafe {
                *out_value = value;
            }
            clear_last_error();
            EquationErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Solve for `target` from a sparse array of entered values.
///
/// Units without an entry count as 0, which yields 0 rather than NaN for an
/// incompletely filled form. A value supplied for the target itself is ignored.
/// When the same unit appears more than once the last entry wins.
///
/// # Safety
/// - `values` must point to `values_len` `UnitValue`s (null is allowed for zero).
/// - `out_value` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_solve_values(
    equation: usize,
    target: EquationTarget,
    values: *const UnitValue,
    values_len: usize,
    out_value: *mut f64,
) -> EquationErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultEquationError::null_pointer("out_value"));
    }

    // SAFETY: forwarded caller contract.
    let entries = match track_result(unsafe { slice_from_raw(values, values_len, "values") }) {
        Ok(entries) => entries,
        Err(code) => return code,
    };
    let map: UnitValues = entries
        .iter()
        .map(|entry| (entry.quantity.unit(entry.squared), entry.value))
        .collect();

    let solved = track_result(catalog_equation(equation))
        .and_then(|eq| track_result(eq.solve_by_value_map(Target::from(target), &map)));
    match solved {
        Ok(value) => {
            // SAFETY: checked non-null above.
            unsafe {
                *out_value = value;
            }
            clear_last_error();
            EquationErrorCode::Ok
        }
        Err(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QuantityCode, TargetRole};
    use std::ptr;

    const PV2R: usize = 5;

    fn top(index: usize) -> EquationTarget {
        EquationTarget {
            role: TargetRole::Top,
            index,
        }
    }

    fn bottom(index: usize) -> EquationTarget {
        EquationTarget {
            role: TargetRole::Bottom,
            index,
        }
    }

    #[test]
    fn test_normalize_target() {
        let mut out = top(0);
        let code = unsafe { equation_normalize_target(PV2R, top(3), &mut out) };
        assert_eq!(code, EquationErrorCode::Ok);
        assert_eq!(out, bottom(0));

        let code = unsafe { equation_normalize_target(0, bottom(1), &mut out) };
        assert_eq!(code, EquationErrorCode::Ok);
        assert_eq!(out, bottom(1));
    }

    #[test]
    fn test_dense_solve() {
        let bottom_values = [12.0, 3.0];
        let mut out = -1.0;
        let code = unsafe {
            equation_solve(
                PV2R,
                top(0),
                ptr::null(),
                0,
                bottom_values.as_ptr(),
                bottom_values.len(),
                &mut out,
            )
        };
        assert_eq!(code, EquationErrorCode::Ok);
        assert_eq!(out, 6.0);
    }

    #[test]
    fn test_dense_solve_arity_mismatch() {
        let values = [1.0, 2.0];
        let mut out = 0.0;
        let code = unsafe {
            equation_solve(
                0,
                bottom(0),
                values.as_ptr(),
                1,
                values.as_ptr(),
                2,
                &mut out,
            )
        };
        assert_eq!(code, EquationErrorCode::ArityMismatch);
        assert!(!crate::error::equation_get_last_error().is_null());
    }

    #[test]
    fn test_dense_solve_null_array() {
        let mut out = 0.0;
        let code = unsafe { equation_solve(0, top(0), ptr::null(), 0, ptr::null(), 2, &mut out) };
        assert_eq!(code, EquationErrorCode::NullPointer);
    }

    #[test]
    fn test_sparse_solve() {
        let values = [
            UnitValue {
                quantity: QuantityCode::Voltage,
                squared: true,
                value: 9.0,
            },
            UnitValue {
                quantity: QuantityCode::Resistance,
                squared: false,
                value: 3.0,
            },
        ];
        let mut out = 0.0;
        let code =
            unsafe { equation_solve_values(PV2R, bottom(0), values.as_ptr(), values.len(), &mut out) };
        assert_eq!(code, EquationErrorCode::Ok);
        assert_eq!(out, 27.0);
    }

    #[test]
    fn test_sparse_solve_empty_is_zero() {
        let mut out = -1.0;
        let code = unsafe { equation_solve_values(0, top(0), ptr::null(), 0, &mut out) };
        assert_eq!(code, EquationErrorCode::Ok);
        assert_eq!(out, 0.0);
    }

    #[test]
    fn test_sparse_solve_stale_target() {
        let mut out = 0.0;
        let code = unsafe { equation_solve_values(0, top(2), ptr::null(), 0, &mut out) };
        assert_eq!(code, EquationErrorCode::IndexOutOfRange);
    }

    #[test]
    fn test_null_output_rejected() {
        let code = unsafe { equation_solve_values(0, top(0), ptr::null(), 0, ptr::null_mut()) };
        assert_eq!(code, EquationErrorCode::NullPointer);
    }
}
