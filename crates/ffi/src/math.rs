use vector3_core::Vector3;

use crate::error::{DefaultVector3Error, Vector3ErrorCode};
use crate::helpers::{handle_ffi_result, read_vector, update_vector, write_vector};
use crate::CVector3;

// ============================================================================
// PRODUCTS AND MEASURES
// ============================================================================

/// Dot product of `a` and `b`.
#[no_mangle]
pub extern "C" fn vector3_dot(a: CVector3, b: CVector3) -> f32 {
    Vector3::from(a).dot(b.into())
}

/// Right-handed cross product `a × b`.
#[no_mangle]
pub extern "C" fn vector3_cross(a: CVector3, b: CVector3) -> CVector3 {
    Vector3::from(a).cross(b.into()).into()
}

/// Distance between the points `a` and `b`.
#[no_mangle]
pub extern "C" fn vector3_distance(a: CVector3, b: CVector3) -> f32 {
    Vector3::from(a).distance(b.into())
}

/// Unsigned angle between `from` and `to` in radians, in `[0, π]`.
/// `NaN` if either vector is zero.
#[no_mangle]
pub extern "C" fn vector3_angle(from: CVector3, to: CVector3) -> f32 {
    Vector3::from(from).angle(to.into())
}

/// Angle between `from` and `to` in radians, negative when the turn is
/// clockwise about `axis`.
#[no_mangle]
pub extern "C" fn vector3_signed_angle(from: CVector3, to: CVector3, axis: CVector3) -> f32 {
    Vector3::from(from).signed_angle(to.into(), axis.into())
}

/// Component-wise maximum.
#[no_mangle]
pub extern "C" fn vector3_max(a: CVector3, b: CVector3) -> CVector3 {
    Vector3::from(a).max(b.into()).into()
}

/// Component-wise minimum.
#[no_mangle]
pub extern "C" fn vector3_min(a: CVector3, b: CVector3) -> CVector3 {
    Vector3::from(a).min(b.into()).into()
}

// ============================================================================
// LENGTH, PROJECTION AND REFLECTION
// ============================================================================

/// Unit-length copy of `v`. The zero vector yields `NaN` components.
#[no_mangle]
pub extern "C" fn vector3_normalized(v: CVector3) -> CVector3 {
    Vector3::from(v).normalized().into()
}

/// Copy of `v` shortened to at most `max_length`.
#[no_mangle]
pub extern "C" fn vector3_clamp_magnitude(v: CVector3, max_length: f32) -> CVector3 {
    Vector3::from(v).clamp_magnitude(max_length).into()
}

/// Projection of `v` onto the line along `on_normal`.
#[no_mangle]
pub extern "C" fn vector3_project(v: CVector3, on_normal: CVector3) -> CVector3 {
    Vector3::from(v).project(on_normal.into()).into()
}

/// Projection of `v` onto the plane through the origin with normal `plane_normal`.
#[no_mangle]
pub extern "C" fn vector3_project_on_plane(v: CVector3, plane_normal: CVector3) -> CVector3 {
    Vector3::from(v).project_on_plane(plane_normal.into()).into()
}

/// Reflection of `direction` off the plane with unit normal `plane_normal`.
#[no_mangle]
pub extern "C" fn vector3_reflect(direction: CVector3, plane_normal: CVector3) -> CVector3 {
    Vector3::from(direction).reflect(plane_normal.into()).into()
}

// ============================================================================
// INTERPOLATION
// ============================================================================

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[no_mangle]
pub extern "C" fn vector3_lerp(a: CVector3, b: CVector3, t: f32) -> CVector3 {
    Vector3::from(a).lerp(b.into(), t).into()
}

/// Linear interpolation without clamping `t`.
#[no_mangle]
pub extern "C" fn vector3_lerp_unclamped(a: CVector3, b: CVector3, t: f32) -> CVector3 {
    Vector3::from(a).lerp_unclamped(b.into(), t).into()
}

/// Spherical interpolation with `t` clamped to `[0, 1]`.
#[no_mangle]
pub extern "C" fn vector3_slerp(a: CVector3, b: CVector3, t: f32) -> CVector3 {
    Vector3::from(a).slerp(b.into(), t).into()
}

/// Spherical interpolation without clamping `t`.
#[no_mangle]
pub extern "C" fn vector3_slerp_unclamped(a: CVector3, b: CVector3, t: f32) -> CVector3 {
    Vector3::from(a).slerp_unclamped(b.into(), t).into()
}

/// Step from `current` toward `target` by at most `max_distance_delta`.
#[no_mangle]
pub extern "C" fn vector3_move_towards(
    current: CVector3,
    target: CVector3,
    max_distance_delta: f32,
) -> CVector3 {
    Vector3::from(current)
        .move_towards(target.into(), max_distance_delta)
        .into()
}

/// Turn `current` toward `target` by at most `max_radians_delta`, moving its
/// length toward `target`'s by at most `max_magnitude_delta`.
#[no_mangle]
pub extern "C" fn vector3_rotate_towards(
    current: CVector3,
    target: CVector3,
    max_radians_delta: f32,
    max_magnitude_delta: f32,
) -> CVector3 {
    Vector3::from(current)
        .rotate_towards(target.into(), max_radians_delta, max_magnitude_delta)
        .into()
}

/// Critically damped step from `current` toward `target`.
///
/// Parameters
/// - `velocity`: in/out velocity carried between frames. Must be non-null.
/// - `smooth_time`: approximate time to reach the target (floored at a small positive value)
/// - `max_speed`: speed cap; pass `INFINITY` for none
/// - `delta_time`: frame time in seconds, must be a non-negative number
/// - `out`: receives the new position. Must be non-null.
///
/// Returns
/// - `Vector3ErrorCode::Ok` on success
/// - `Vector3ErrorCode::NullPointer` if `velocity` or `out` is null
/// - `Vector3ErrorCode::InvalidParameter` if `delta_time` is negative or `NaN`;
///   neither `velocity` nor `out` is written
///
/// # Safety
/// `velocity` must be null or point to a valid, writable `CVector3`, and `out`
/// must be null or valid for writes of a `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_smooth_damp(
    current: CVector3,
    target: CVector3,
    velocity: *mut CVector3,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
    out: *mut CVector3,
) -> Vector3ErrorCode {
    handle_ffi_result(unsafe {
        smooth_damp_into(current, target, velocity, smooth_time, max_speed, delta_time, out)
    })
}

/// # Safety
/// Same contract as [`vector3_smooth_damp`].
unsafe fn smooth_damp_into(
    current: CVector3,
    target: CVector3,
    velocity: *mut CVector3,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
    out: *mut CVector3,
) -> Result<(), DefaultVector3Error> {
    if delta_time.is_nan() || delta_time < 0.0 {
        return Err(DefaultVector3Error::invalid_parameter(
            "delta_time",
            "must be a non-negative number",
        ));
    }
    if out.is_null() {
        return Err(DefaultVector3Error::null_pointer("out"));
    }

    let mut current_velocity = unsafe { read_vector(velocity, "velocity") }?;
    let position = Vector3::from(current).smooth_damp(
        target.into(),
        &mut current_velocity,
        smooth_time,
        max_speed,
        delta_time,
    );

    unsafe { write_vector(velocity, "velocity", current_velocity) }?;
    unsafe { write_vector(out, "out", position) }
}

// ============================================================================
// IN-PLACE OPERATIONS
// ============================================================================

/// Normalize `v` in place.
///
/// # Safety
/// `v` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_normalize(v: *mut CVector3) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { update_vector(v, "v", Vector3::normalize) })
}

/// Multiply `v` component-wise by `factors` in place.
///
/// # Safety
/// `v` must be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_scale(v: *mut CVector3, factors: CVector3) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { update_vector(v, "v", |value| value.scale(factors.into())) })
}

/// Normalize `normal` and make `tangent` a unit vector perpendicular to it.
///
/// Both vectors are read before either is written.
///
/// # Safety
/// `normal` and `tangent` must each be null or point to a valid, writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_ortho_normalize(
    normal: *mut CVector3,
    tangent: *mut CVector3,
) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { ortho_normalize_in_place(normal, tangent) })
}

/// # Safety
/// Same contract as [`vector3_ortho_normalize`].
unsafe fn ortho_normalize_in_place(
    normal: *mut CVector3,
    tangent: *mut CVector3,
) -> Result<(), DefaultVector3Error> {
    let mut n = unsafe { read_vector(normal, "normal") }?;
    let mut t = unsafe { read_vector(tangent, "tangent") }?;
    Vector3::ortho_normalize(&mut n, &mut t);
    unsafe { write_vector(normal, "normal", n) }?;
    unsafe { write_vector(tangent, "tangent", t) }
}

/// Make `normal`, `tangent` and `binormal` mutually orthogonal unit vectors.
///
/// `binormal` keeps its side of the `normal`/`tangent` plane. All three vectors are read before any is written.
///
/// # Safety
/// `normal`, `tangent` and `binormal` must each be null or point to a valid,
/// writable `CVector3`.
#[no_mangle]
pub unsafe extern "C" fn vector3_ortho_normalize3(
    normal: *mut CVector3,
    tangent: *mut CVector3,
    binormal: *mut CVector3,
) -> Vector3ErrorCode {
    handle_ffi_result(unsafe { ortho_normalize3_in_place(normal, tangent, binormal) })
}

/// # Safety
/// Same contract as [`vector3_ortho_normalize3`].
unsafe fn ortho_normalize3_in_place(
    normal: *mut CVector3,
    tangent: *mut CVector3,
    binormal: *mut CVector3,
) -> Result<(), DefaultVector3Error> {
    let mut n = unsafe { read_vector(normal, "normal") }?;
    let mut t = unsafe { read_vector(tangent, "tangent") }?;
    let mut b = unsafe { read_vector(binormal, "binormal") }?;
    Vector3::ortho_normalize3(&mut n, &mut t, &mut b);
    unsafe { write_vector(normal, "normal", n) }?;
    unsafe { write_vector(tangent, "tangent", t) }?;
    unsafe { write_vector(binormal, "binormal", b) }
}
