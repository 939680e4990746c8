use crate::error::{
    with_last_error_mut, DefaultEquationError, EquationErrorCode, EquationFfiError,
};
use equation_core::Equation;
use std::ffi::CString;
use std::os::raw::c_char;
use std::slice;
use tracing::debug;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
/// Accepts any type implementing `EquationFfiError` trait.
pub(crate) fn set_last_error(error: &impl EquationFfiError) {
    debug!(code = ?error.code(), error = error.msg(), "ffi call failed");
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl EquationFfiError) -> EquationErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations so stale messages never outlive the call that set them.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = EquationErrorCode::Ok;
    });
}

/// Resolve a result into its success value, or record the error and return its code.
pub(crate) fn track_result<T, E>(result: Result<T, E>) -> Result<T, EquationErrorCode>
where
    E: Into<DefaultEquationError>,
{
    result.map_err(|err| track_error(&err.into()))
}

/// Look up a built-in equation by catalog index.
pub(crate) fn catalog_equation(index: usize) -> Result<&'static Equation, DefaultEquationError> {
    let catalog = equation_core::catalog::all();
    catalog
        .get(index)
        .ok_or_else(|| DefaultEquationError::unknown_equation(index, catalog.len()))
}

/// Borrow a caller-owned array. A null pointer is accepted when `len` is zero.
///
/// # Safety
/// If `len > 0`, `ptr` must point to `len` readable, initialized elements that stay
/// valid for the returned lifetime.
pub(crate) unsafe fn slice_from_raw<'a, T>(
    ptr: *const T,
    len: usize,
    param_name: &str,
) -> Result<&'a [T], DefaultEquationError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(DefaultEquationError::null_pointer(param_name));
    }
    // SAFETY: non-null and the caller guarantees `len` valid elements.
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Copy `text` into a caller buffer as a NUL-terminated string.
///
/// `out_len` (if non-null) always receives the text length in bytes, excluding the
/// terminator, so callers can size a retry after `BufferTooSmall`.
///
/// # Safety
/// `buf` must point to `buf_len` writable bytes (or be null with `buf_len == 0`);
/// `out_len` must be null or valid for writes.
pub(crate) unsafe fn write_c_string(
    text: &str,
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> EquationErrorCode {
    if !out_len.is_null() {
        // SAFETY: checked non-null, caller guarantees validity.
        unsafe {
            *out_len = text.len();
        }
    }

    let needed = text.len() + 1;
    if buf_len < needed {
        return track_error(&DefaultEquationError::buffer_too_small(needed, buf_len));
    }
    if buf.is_null() {
        return track_error(&DefaultEquationError::null_pointer("buf"));
    }

    // SAFETY: `buf` holds at least `needed` bytes per the caller contract.
    unsafe {
        let dst = slice::from_raw_parts_mut(buf.cast::<u8>(), needed);
        dst[..text.len()].copy_from_slice(text.as_bytes());
        dst[text.len()] = 0;
    }
    clear_last_error();
    EquationErrorCode::Ok
}
