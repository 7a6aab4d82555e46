use std::os::raw::c_char;
use std::ptr;

use vector3_core::Vector3;

use crate::error::{DefaultVector3Error, Vector3ErrorCode};
use crate::helpers::{handle_ffi_result, update_vector, write_vector};
use crate::CVector3;

// ============================================================================
// NAMED CONSTANT SELECTORS
// ============================================================================

/// Selector for `Vector3::ZERO` in [`vector3_constant`].
pub const VECTOR3_ZERO: u8 = 0;
/// Selector for `Vector3::ONE`.
pub const VECTOR3_ONE: u8 = 1;
/// Selector for `Vector3::UP`.
pub const VECTOR3_UP: u8 = 2;
/// Selector for `Vector3::DOWN`.
pub const VECTOR3_DOWN: u8 = 3;
/// Selector for `Vector3::LEFT`.
pub const VECTOR3_LEFT: u8 = 4;
/// Selector for `Vector3::RIGHT`.
pub const VECTOR3_RIGHT: u8 = 5;
/// Selector for `Vector3::FORWARD`.
pub const VECTOR3_FORWARD: u8 = 6;
/// Selector for `Vector3::BACK`.
pub const VECTOR3_BACK: u8 = 7;
/// Selector for `Vector3::POSITIVE_INFINITY` (`FLT_MAX` on every component).
pub const VECTOR3_POSITIVE_INFINITY: u8 = 8;
/// Selector for `Vector3::NEGATIVE_INFINITY` (`FLT_MIN` on every component).
pub const VECTOR3_NEGATIVE_INFINITY: u8 = 9;

fn constant_from_kind(kind: u8) -> Option<Vector3> {
    Some(match kind {
        VECTOR3_ZERO => Vector3::ZERO,
        VECTOR3_ONE => Vector3::ONE,
        VECTOR3_UP => Vector3::UP,
        VECTOR3_DOWN => Vector3::DOWN,
        VECTOR3_LEFT => Vector3::LEFT,
        VECTOR3_RIGHT => Vector3::RIGHT,
        VECTOR3_FORWARD => Vector3::FORWARD,
        VECTOR3_BACK => Vector3::BACK,
        VECTOR3_POSITIVE_INFINITY => Vector3::POSITIVE_INFINITY,
        VECTOR3_NEGATIVE_INFINITY => Vector3::NEGATIVE_INFINITY,
        _ => return None,
    })
}

// ============================================================================
// CONSTRUCTION AND MUTATION
// ============================================================================

/// Create a vector from x, y and z components.
#[no_mangle]
pub extern "C" fn vector3_new(x: f32, y: f32, z: f32) -> CVector3 {
    Vector3::new(x, y, z).into()
}

/// Write one of the named constants into `out`.
///
/// Returns
/// - `Vector3ErrorCode::Ok` on success
/// - `Vector3ErrorCode::NullPointer` if `out` is null
/// - `Vector3ErrorCode::InvalidParameter` if `kind` is not one of the `VECTOR3_*` selectors
///
/// # Safety
/// `out` must be null or valid for writes of a `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_constant(kind: u8, out: *mut CVector3) -> Vector3ErrorCode {
    let result = match constant_from_kind(kind) {
        Some(value) => unsafe { write_vector(out, "out", value) },
        None => Err(DefaultVector3Error::invalid_parameter(
            "kind",
            &format!("unknown constant selector {kind}"),
        )),
    };
    handle_ffi_result(result)
}

/// Overwrite all three components of `v`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_set(v: *mut CVector3, x: f32, y: f32, z: f32) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { update_vector(v, "v", |value| value.set(x, y, z)) })
}

/// Set every component of `v` to `n`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_set_all(v: *mut CVector3, n: f32) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { update_vector(v, "v", |value| value.set_all(n)) })
}

// ============================================================================
// QUERIES
// ============================================================================

/// Exact component-wise equality.
#[no_mangle]
pub extern "C" fn vector3_equals(a: CVector3, b: CVector3) -> bool {
    Vector3::from(a).equals(&Vector3::from(b))
}

/// Euclidean length of `v`.
#[no_mangle]
pub extern "C" fn vector3_magnitude(v: CVector3) -> f32 {
    Vector3::from(v).magnitude()
}

/// Squared length of `v`.
#[no_mangle]
pub extern "C" fn vector3_sqr_magnitude(v: CVector3) -> f32 {
    Vector3::from(v).sqr_magnitude()
}

// ============================================================================
// TEXT
// ============================================================================

/// Bytes needed to format `v`, including the NUL terminator.
#[no_mangle]
pub extern "C" fn vector3_format_len(v: CVector3, wrap: bool) -> usize {
    Vector3::from(v).to_string_wrapped(wrap).len() + 1
}

/// Format `v` as `"(x, y, z)"` (or `"x, y, z"` when `wrap` is false) into `buf`.
///
/// The output is always NUL-terminated on success. Size `buf` with
/// [`vector3_format_len`].
///
/// Returns
/// - `Vector3ErrorCode::Ok` on success
/// - `Vector3ErrorCode::NullPointer` if `buf` is null
/// - `Vector3ErrorCode::BufferTooSmall` if `len` can't hold the text and terminator;
///   `buf` is left untouched
///
/// Example (C)
/// ```c
/// char text[64];
/// if (vector3_format(vector3_new(1.0f, 2.5f, -3.0f), true, text, sizeof text) == Vector3ErrorCode_Ok) {
///     puts(text); // (1, 2.5, -3)
/// }
/// ```
///
/// # Safety
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn vector3_format(
    v: CVector3,
    wrap: bool,
    buf: *mut c_char,
    len: usize,
) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { format_into(v, wrap, buf, len) })
}

/// # Safety
/// `buf` must be null or valid for writes of `len` bytes.
unsafe fn format_into(
    v: CVector3,
    wrap: bool,
    buf: *mut c_char,
    len: usize,
) -> Result<(), DefaultVector3Error> {
    if buf.is_null() {
        return Err(DefaultVector3Error::null_pointer("buf"));
    }

    let text = Vector3::from(v).to_string_wrapped(wrap);
    let required = text.len() + 1;
    if len < required {
        return Err(DefaultVector3Error::buffer_too_small(required, len));
    }

    // SAFETY: buf is non-null and the caller guarantees `len >= required` writable bytes.
    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buf, text.len());
        buf.add(text.len()).write(0);
    }
    Ok(())
}
