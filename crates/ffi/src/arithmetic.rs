use vector3_core::Vector3;

use crate::CVector3;

// ============================================================================
// VECTOR / VECTOR (COMPONENT-WISE)
// ============================================================================

/// `a + b`
#[no_mangle]
pub extern "C" fn vector3_add(a: CVector3, b: CVector3) -> CVector3 {
    (Vector3::from(a) + Vector3::from(b)).into()
}

/// `a - b`
#[no_mangle]
pub extern "C" fn vector3_sub(a: CVector3, b: CVector3) -> CVector3 {
    (Vector3::from(a) - Vector3::from(b)).into()
}

/// Component-wise product of `a` and `b`.
#[no_mangle]
pub extern "C" fn vector3_mul(a: CVector3, b: CVector3) -> CVector3 {
    (Vector3::from(a) * Vector3::from(b)).into()
}

/// Component-wise quotient of `a` and `b`. Zero divisors follow IEEE-754.
#[no_mangle]
pub extern "C" fn vector3_div(a: CVector3, b: CVector3) -> CVector3 {
    (Vector3::from(a) / Vector3::from(b)).into()
}

// ============================================================================
// VECTOR / SCALAR
// ============================================================================

/// Add `s` to every component of `v`.
#[no_mangle]
pub extern "C" fn vector3_add_scalar(v: CVector3, s: f32) -> CVector3 {
    (Vector3::from(v) + s).into()
}

/// Subtract `s` from every component of `v`.
#[no_mangle]
pub extern "C" fn vector3_sub_scalar(v: CVector3, s: f32) -> CVector3 {
    (Vector3::from(v) - s).into()
}

/// Scale `v` by `s`.
#[no_mangle]
pub extern "C" fn vector3_mul_scalar(v: CVector3, s: f32) -> CVector3 {
    (Vector3::from(v) * s).into()
}

/// Divide every component of `v` by `s`.
#[no_mangle]
pub extern "C" fn vector3_div_scalar(v: CVector3, s: f32) -> CVector3 {
    (Vector3::from(v) / s).into()
}

/// `-v`
#[no_mangle]
pub extern "C" fn vector3_negate(v: CVector3) -> CVector3 {
    (-Vector3::from(v)).into()
}
