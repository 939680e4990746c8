use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use equation_core::EquationError;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait EquationFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> EquationErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `EquationFfiError` for FFI error scenarios.
///
/// Wraps an `EquationErrorCode` with a message. Core solver errors convert into it
/// through `From<EquationError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultEquationError {
    code: EquationErrorCode,
    msg: String,
}

impl DefaultEquationError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_value"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: EquationErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a catalog index past the end of the built-in catalog.
    ///
    /// # Arguments
    /// * `index` - The requested catalog index
    /// * `count` - Number of equations in the catalog
    pub fn unknown_equation(index: usize, count: usize) -> Self {
        Self {
            code: EquationErrorCode::UnknownEquation,
            msg: format!("Equation index {index} out of range, catalog has {count} equations"),
        }
    }

    /// Create error for an output buffer that cannot hold the text plus its terminator.
    ///
    /// # Arguments
    /// * `needed` - Bytes required, including the NUL terminator
    /// * `available` - Size of the caller's buffer
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self {
            code: EquationErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: need {needed} bytes, got {available}"),
        }
    }
}

impl From<EquationError> for DefaultEquationError {
    fn from(error: EquationError) -> Self {
        let code = match error {
            EquationError::ArityMismatch { .. } | EquationError::InvalidArity { .. } => {
                EquationErrorCode::ArityMismatch
            }
            EquationError::IndexOutOfRange { .. } => EquationErrorCode::IndexOutOfRange,
            EquationError::UnitNotFound { .. } => EquationErrorCode::UnitNotFound,
            EquationError::EmptyGroup | EquationError::DuplicateUnit { .. } => {
                EquationErrorCode::InvalidParameter
            }
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl EquationFfiError for DefaultEquationError {
    fn code(&self) -> EquationErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by equation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Catalog index does not name a built-in equation.
    UnknownEquation = 2,

    /// Value arrays do not leave exactly one open slot for the target.
    ArityMismatch = 3,

    /// Target addresses a unit past the end of its group. Normalize targets first.
    IndexOutOfRange = 4,

    /// Unit is not part of the equation.
    UnitNotFound = 5,

    /// Output buffer too small for the requested text.
    BufferTooSmall = 6,

    /// Invalid parameter passed to function.
    InvalidParameter = 7,
}

impl From<DefaultEquationError> for EquationErrorCode {
    fn from(error: DefaultEquationError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored to keep the pointer handed out by `equation_get_last_error` alive.
    static LAST_ERROR: RefCell<(Option<CString>, EquationErrorCode)> = const { RefCell::new((None, EquationErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, EquationErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, EquationErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double current = 0.0;
/// if (equation_solve_values(0, target, values, 2, &current) != Ok) {
///     const char* error = equation_get_last_error();
///     if (error) {
///         printf("Solve failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn equation_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `EquationErrorCode::Ok` (0) if the last call on this thread succeeded,
/// otherwise the code that call returned.
#[no_mangle]
pub extern "C" fn equation_get_last_error_code() -> EquationErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equation_core::Target;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: DefaultEquationError = EquationError::ArityMismatch {
            target: Target::Top(0),
            numerator: 1,
            denominator: 1,
        }
        .into();
        assert_eq!(err.code(), EquationErrorCode::ArityMismatch);

        let err: DefaultEquationError = EquationError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(err.code(), EquationErrorCode::IndexOutOfRange);
        assert_eq!(err.msg(), "Index 3 out of range for group of 1 units");

        let err: DefaultEquationError = EquationError::UnitNotFound {
            symbol: "l".to_string(),
        }
        .into();
        assert_eq!(err.code(), EquationErrorCode::UnitNotFound);
    }

    #[test]
    fn test_constructors() {
        let err = DefaultEquationError::null_pointer("out_value");
        assert_eq!(err.code(), EquationErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'out_value' cannot be null");

        let err = DefaultEquationError::unknown_equation(9, 7);
        assert_eq!(err.code(), EquationErrorCode::UnknownEquation);
    }
}
