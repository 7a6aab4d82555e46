use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// A rejected call: the code C sees plus the text behind `vector3_get_last_error`.
pub(crate) trait Vector3Error {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vector3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vector3Error` for the FFI error scenarios.
///
/// Wraps a `Vector3ErrorCode` with a message and provides a constructor for
/// each error type (except Ok, which represents success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVector3Error {
    code: Vector3ErrorCode,
    msg: String,
}

impl DefaultVector3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"velocity"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vector3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an argument outside its accepted range.
    ///
    /// # Arguments
    /// * `param_name` - The name of the invalid parameter (e.g., `"kind"`, `"delta_time"`)
    /// * `message` - A description of the validation error
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self {
            code: Vector3ErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}': {message}"),
        }
    }

    /// Create error for an output buffer that can't hold the result.
    ///
    /// # Arguments
    /// * `required` - Bytes needed, including the NUL terminator
    /// * `provided` - Bytes the caller supplied
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Self {
            code: Vector3ErrorCode::BufferTooSmall,
            msg: format!("Buffer of {provided} bytes is too small, {required} bytes required"),
        }
    }
}

impl Vector3Error for DefaultVector3Error {
    fn code(&self) -> Vector3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fallible vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function.
    InvalidParameter = 2,

    /// Output buffer too small for the formatted string.
    BufferTooSmall = 3,
}

/// Outcome of the last fallible call on one thread.
///
/// `message` owns the text handed out by [`vector3_get_last_error`], so the
/// pointer stays valid until the next fallible call replaces it.
struct LastError {
    message: Option<CString>,
    code: Vector3ErrorCode,
}

thread_local! {
    static LAST_ERROR: RefCell<LastError> = const {
        RefCell::new(LastError { message: None, code: Vector3ErrorCode::Ok })
    };
}

/// Remember `error` as this thread's last failure.
pub(crate) fn record_error(error: &impl Vector3Error) {
    LAST_ERROR.with_borrow_mut(|last| {
        // Messages are built from parameter names, never interior NULs
        last.message = CString::new(error.msg()).ok();
        last.code = error.code();
    });
}

/// Mark the last call on this thread as successful.
pub(crate) fn reset_error() {
    LAST_ERROR.with_borrow_mut(|last| {
        last.message = None;
        last.code = Vector3ErrorCode::Ok;
    });
}

/// Message for the last rejected call on this thread, or null if that call
/// succeeded (or nothing fallible has run yet).
///
/// The string belongs to the library and lives until the next fallible call
/// on the same thread. Copy it if you need it longer; never free it.
///
/// Example:
/// ```c
/// if (vector3_normalize(NULL) != Vector3ErrorCode_Ok) {
///     const char* error = vector3_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector3_get_last_error() -> *const c_char {
    LAST_ERROR.with_borrow(|last| last.message.as_ref().map_or(ptr::null(), |m| m.as_ptr()))
}

/// Code of the last fallible call on this thread, `Ok` if it succeeded.
#[no_mangle]
pub extern "C" fn vector3_get_last_error_code() -> Vector3ErrorCode {
    LAST_ERROR.with_borrow(|last| last.code)
}
