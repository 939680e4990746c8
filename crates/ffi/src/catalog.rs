//! FFI queries over the built-in equation catalog.
//!
//! Equations are addressed by their zero-based catalog index; index 0 is `V = IR`.
//! All text is copied into caller-owned buffers, so nothing returned here needs freeing.

use std::os::raw::c_char;

use crate::error::{DefaultEquationError, EquationErrorCode};
use crate::helpers::{catalog_equation, clear_last_error, track_error, track_result, write_c_string};
use crate::types::{EquationTarget, QuantityCode, TargetRole, UnitKey, UnitTextField};

/// Number of built-in equations.
#[no_mangle]
pub extern "C" fn equation_catalog_count() -> usize {
    equation_core::catalog::all().len()
}

/// Number of units in one group of a catalog equation.
///
/// # Arguments
/// * `equation` - Catalog index
/// * `role` - Group to measure
/// * `out_len` - Receives the group size
///
/// # Safety
/// `out_len` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_group_len(
    equation: usize,
    role: TargetRole,
    out_len: *mut usize,
) -> EquationErrorCode {
    if out_len.is_null() {
        return track_error(&DefaultEquationError::null_pointer("out_len"));
    }
    let eq = match track_result(catalog_equation(equation)) {
        Ok(eq) => eq,
        Err(code) => return code,
    };

    let len = match role {
        TargetRole::Top => eq.numerator().len(),
        TargetRole::Bottom => eq.denominator().len(),
    };
    // SAFETY: checked non-null above.
    unsafe {
        *out_len = len;
    }
    clear_last_error();
    EquationErrorCode::Ok
}

/// Copy an equation's description (`V = IR`) into `buf`.
///
/// # Arguments
/// * `equation` - Catalog index
/// * `buf` / `buf_len` - Destination buffer and its size in bytes
/// * `out_len` - Optional; receives the description length in bytes without the terminator
///
/// # Returns
/// - `Ok` on success
/// - `BufferTooSmall` if `buf_len` cannot hold the text plus NUL (`out_len` still set)
/// - `UnknownEquation` if `equation` is not a catalog index
///
/// # Safety
/// `buf` must point to `buf_len` writable bytes; `out_len` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_describe(
    equation: usize,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> EquationErrorCode {
    match track_result(catalog_equation(equation)) {
        // SAFETY: forwarded caller contract.
        Ok(eq) => unsafe { write_c_string(&eq.to_string(), buf, buf_len, out_len) },
        Err(code) => code,
    }
}

/// Copy one text field of the unit at `target` into `buf`.
///
/// Exponents are written in caret form (`V^2`); split on `^` to draw a superscript.
///
/// # Safety
/// `buf` must point to `buf_len` writable bytes; `out_len` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_unit_text(
    equation: usize,
    target: EquationTarget,
    field: UnitTextField,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> EquationErrorCode {
    let unit = match track_result(catalog_equation(equation))
        .and_then(|eq| track_result(eq.resolve(target.into())))
    {
        Ok(unit) => unit,
        Err(code) => return code,
    };

    let symbol;
    let text: &str = match field {
        UnitTextField::EquationSymbol => {
            symbol = unit.equation_symbol();
            &symbol
        }
        UnitTextField::UnitSymbol => unit.unit_symbol(),
        UnitTextField::UnitName => unit.unit_name(),
        UnitTextField::UnitPurpose => unit.unit_purpose(),
    };
    // SAFETY: forwarded caller contract.
    unsafe { write_c_string(text, buf, buf_len, out_len) }
}

/// Identify the unit at `target`, for keying user-entered values.
///
/// # Safety
/// `out_key` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn equation_unit_key(
    equation: usize,
    target: EquationTarget,
    out_key: *mut UnitKey,
) -> EquationErrorCode {
    if out_key.is_null() {
        return track_error(&DefaultEquationError::null_pointer("out_key"));
    }
    let unit = match track_result(catalog_equation(equation))
        .and_then(|eq| track_result(eq.resolve(target.into())))
    {
        Ok(unit) => unit,
        Err(code) => return code,
    };

    let Some(quantity) = QuantityCode::from_quantity(unit.quantity()) else {
        return track_error(&DefaultEquationError::from(
            equation_core::EquationError::UnitNotFound {
                symbol: unit.equation_symbol().into_owned(),
            },
        ));
    };
    // SAFETY: checked non-null above.
    unsafe {
        *out_key = UnitKey {
            quantity,
            squared: unit.transform() == equation_core::Transform::Squared,
        };
    }
    clear_last_error();
    EquationErrorCode::Ok
}
