//! Products, distances, angles, projection, reflection and orthonormalization.
//!
//! Every function here is an associated function of [`Vector3`] taking the
//! vector by value, so both `a.dot(b)` and `Vector3::dot(a, b)` read naturally.
//! The exceptions mutate through `&mut`: [`Vector3::normalize`],
//! [`Vector3::scale`], [`Vector3::ortho_normalize`] and
//! [`Vector3::ortho_normalize3`].

use crate::constants::EPSILON_SQUARED;
use crate::Vector3;
use tracing::trace;

impl Vector3 {
    /// Dot product of two vectors.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `RIGHT × UP = FORWARD`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance between two points.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Vector3) -> f32 {
        (self - other).magnitude()
    }

    /// Component-wise maximum. A NaN component loses to a number.
    #[inline]
    #[must_use]
    pub fn max(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise minimum. A NaN component loses to a number.
    #[inline]
    #[must_use]
    pub fn min(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Unsigned angle between two vectors, in radians, in `[0, π]`.
    ///
    /// Both inputs are normalized first, then the angle is
    /// `2·atan(‖a − b‖ / ‖a + b‖)`, which stays accurate near 0 and π where
    /// `acos` of the dot product loses precision. Opposite vectors give π; a
    /// zero-length input gives NaN.
    #[must_use]
    pub fn angle(self, other: Vector3) -> f32 {
        let u = self.normalized();
        let w = other.normalized();
        2.0 * ((u - w).magnitude() / (u + w).magnitude()).atan()
    }

    /// Angle from `self` to `other` in radians, in `[-π, π]`.
    ///
    /// The magnitude is [`Vector3::angle`]; the sign is negative when
    /// `self × other` points away from `axis`.
    #[must_use]
    pub fn signed_angle(self, other: Vector3, axis: Vector3) -> f32 {
        let unsigned = self.angle(other);
        if self.normalized().cross(other.normalized()).dot(axis) < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }

    /// Copy of `self` with its magnitude limited to `max_length`.
    ///
    /// Vectors already within the bound are returned unchanged.
    #[must_use]
    pub fn clamp_magnitude(self, max_length: f32) -> Vector3 {
        let sqr = self.sqr_magnitude();
        if sqr > max_length * max_length {
            self * (max_length / sqr.sqrt())
        } else {
            self
        }
    }

    /// Component of `self` parallel to `on_normal`.
    ///
    /// `on_normal` need not be unit length. A zero `on_normal` gives NaN.
    #[must_use]
    pub fn project(self, on_normal: Vector3) -> Vector3 {
        on_normal * (self.dot(on_normal) / on_normal.sqr_magnitude())
    }

    /// Projection of `self` onto the plane through the origin with normal
    /// `plane_normal`: `self` minus its component along the normal.
    #[must_use]
    pub fn project_on_plane(self, plane_normal: Vector3) -> Vector3 {
        self - self.project(plane_normal)
    }

    /// Mirror `self` across the plane with unit normal `plane_normal`:
    /// `v − 2(v·n)n`.
    ///
    /// The normal is used as given; a non-unit normal also scales the result.
    #[must_use]
    pub fn reflect(self, plane_normal: Vector3) -> Vector3 {
        self - plane_normal * (2.0 * self.dot(plane_normal))
    }

    /// Scale this vector in place to a magnitude of 1.
    ///
    /// A zero vector becomes all NaN.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Multiply this vector component-wise by `factors`, in place.
    #[inline]
    pub fn scale(&mut self, factors: Vector3) {
        *self *= factors;
    }

    /// Make `normal` unit length and `tangent` a unit vector orthogonal to it.
    ///
    /// `tangent` keeps its direction within the plane spanned by both inputs
    /// (Gram-Schmidt). When it is zero or parallel to `normal`, an arbitrary
    /// perpendicular is chosen.
    pub fn ortho_normalize(normal: &mut Vector3, tangent: &mut Vector3) {
        normal.normalize();
        *tangent = orthogonal_unit(*normal, *tangent);
    }

    /// Like [`Vector3::ortho_normalize`], and additionally make `binormal` a
    /// unit vector orthogonal to both.
    ///
    /// `binormal` stays on its original side of the `normal`/`tangent` plane.
    /// When it lies in that plane it becomes `normal × tangent`.
    pub fn ortho_normalize3(normal: &mut Vector3, tangent: &mut Vector3, binormal: &mut Vector3) {
        Vector3::ortho_normalize(normal, tangent);

        let v = *binormal;
        let rejected = v - *normal * normal.dot(v) - *tangent * tangent.dot(v);
        *binormal = if is_degenerate(rejected, v) {
            trace!(?v, "binormal lies in normal/tangent plane, using cross product");
            normal.cross(*tangent)
        } else {
            rejected.normalized()
        };
    }
}

/// Unit vector along the part of `v` orthogonal to the unit vector `n`, or
/// any unit perpendicular of `n` when `v` has no such part.
pub(crate) fn orthogonal_unit(n: Vector3, v: Vector3) -> Vector3 {
    let rejected = v - n * n.dot(v);
    if is_degenerate(rejected, v) {
        trace!(?n, ?v, "vector is zero or parallel to reference, using any perpendicular");
        any_orthonormal(n)
    } else {
        rejected.normalized()
    }
}

/// True when `rejected`, what's left of `original` after removing its parallel
/// components, is too short to normalize reliably.
///
/// NaN input compares false here and propagates through normalization.
fn is_degenerate(rejected: Vector3, original: Vector3) -> bool {
    rejected.sqr_magnitude() <= EPSILON_SQUARED * original.sqr_magnitude()
}

/// Some unit vector perpendicular to the unit vector `n`.
///
/// Crosses `n` with the basis axis it is least aligned with, so the cross
/// product is never shorter than `sqrt(2/3)`.
pub(crate) fn any_orthonormal(n: Vector3) -> Vector3 {
    let (ax, ay, az) = (n.x.abs(), n.y.abs(), n.z.abs());
    let axis = if ax <= ay && ax <= az {
        Vector3::RIGHT
    } else if ay <= az {
        Vector3::UP
    } else {
        Vector3::FORWARD
    };
    n.cross(axis).normalized()
}
