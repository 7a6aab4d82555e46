use crate::error::{record_error, reset_error, DefaultVector3Error, Vector3Error, Vector3ErrorCode};
use crate::CVector3;
use vector3_core::Vector3;

/// Log a rejected call, remember it for `vector3_get_last_error` and return
/// the code to hand back to C.
#[inline]
pub(crate) fn track_error(error: &impl Vector3Error) -> Vector3ErrorCode {
    tracing::warn!(code = ?error.code(), "{}", error.msg());
    record_error(error);
    error.code()
}

/// Map the outcome of an entry point to its return code. Success clears any
/// error left by an earlier call on this thread.
pub(crate) fn handle_ffi_result(result: Result<(), DefaultVector3Error>) -> Vector3ErrorCode {
    match result {
        Ok(()) => {
            reset_error();
            Vector3ErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Read a vector through a caller-supplied pointer.
///
/// # Safety
/// `ptr` must be null or point to a valid, initialized `CVector3`.
pub(crate) unsafe fn read_vector(
    ptr: *const CVector3,
    param_name: &str,
) -> Result<Vector3, DefaultVector3Error> {
    if ptr.is_null() {
        return Err(DefaultVector3Error::null_pointer(param_name));
    }
    // SAFETY: non-null checked above; validity is the caller's contract.
    Ok(Vector3::from(unsafe { *ptr }))
}

/// Write a vector through a caller-supplied pointer.
///
/// # Safety
/// `ptr` must be null or valid for writes of a `CVector3`.
pub(crate) unsafe fn write_vector(
    ptr: *mut CVector3,
    param_name: &str,
    value: Vector3,
) -> Result<(), DefaultVector3Error> {
    if ptr.is_null() {
        return Err(DefaultVector3Error::null_pointer(param_name));
    }
    // SAFETY: non-null checked above; validity is the caller's contract.
    unsafe { ptr.write(value.into()) };
    Ok(())
}

/// Read, transform and write back a vector in place.
///
/// # Safety
/// `ptr` must be null or point to a valid `CVector3` that is readable and writable.
pub(crate) unsafe fn update_vector(
    ptr: *mut CVector3,
    param_name: &str,
    f: impl FnOnce(&mut Vector3),
) -> Result<(), DefaultVector3Error> {
    let mut value = unsafe { read_vector(ptr, param_name) }?;
    f(&mut value);
    unsafe { write_vector(ptr, param_name, value) }
}
