//! The `Vector3` value type: data, named constants, construction and mutation.
//!
//! # Design
//! - Plain `#[repr(C)]` value of three `f32`s, `Copy`, no heap, no references
//! - `magnitude`/`sqr_magnitude` are computed from the current components on
//!   every call, so they always reflect in-place mutation
//! - Named constants are `const` items: each use is an independent copy, and
//!   mutating it cannot affect any other use
//! - `==` is exact component equality (see [`crate::tolerance`] for the
//!   approximate comparison)

/// Single-precision 3D vector for positions, directions and velocities.
///
/// Missing trailing components of the shorter constructors default to 0:
///
/// ```
/// use vector3_core::Vector3;
///
/// assert_eq!(Vector3::default(), Vector3::ZERO);
/// assert_eq!(Vector3::from_x(2.0), Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(Vector3::from_xy(2.0, 3.0), Vector3::new(2.0, 3.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vector3 {
    /// X component of the vector.
    pub x: f32,
    /// Y component of the vector.
    pub y: f32,
    /// Z component of the vector.
    pub z: f32,
}

// ============================================================================
// NAMED CONSTANTS
// ============================================================================

impl Vector3 {
    /// Shorthand for `Vector3::new(0.0, 0.0, 0.0)`.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Shorthand for `Vector3::new(1.0, 1.0, 1.0)`.
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    /// Shorthand for `Vector3::new(0.0, 1.0, 0.0)`.
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Shorthand for `Vector3::new(0.0, -1.0, 0.0)`.
    pub const DOWN: Vector3 = Vector3::new(0.0, -1.0, 0.0);

    /// Shorthand for `Vector3::new(-1.0, 0.0, 0.0)`.
    pub const LEFT: Vector3 = Vector3::new(-1.0, 0.0, 0.0);

    /// Shorthand for `Vector3::new(1.0, 0.0, 0.0)`.
    pub const RIGHT: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Shorthand for `Vector3::new(0.0, 0.0, 1.0)`.
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Shorthand for `Vector3::new(0.0, 0.0, -1.0)`.
    pub const BACK: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    /// Largest finite `f32` on every component.
    pub const POSITIVE_INFINITY: Vector3 = Vector3::splat(f32::MAX);

    /// Smallest positive normal `f32` (`FLT_MIN`) on every component.
    ///
    /// The name is historical: this is neither negative nor infinite. Callers
    /// that need a true negative infinity should use
    /// `Vector3::splat(f32::NEG_INFINITY)`.
    pub const NEGATIVE_INFINITY: Vector3 = Vector3::splat(f32::MIN_POSITIVE);
}

// ============================================================================
// CONSTRUCTION AND MUTATION
// ============================================================================

impl Vector3 {
    /// Create a vector from x, y and z components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector with the given x component; y and z are 0.
    #[inline]
    #[must_use]
    pub const fn from_x(x: f32) -> Self {
        Vector3::new(x, 0.0, 0.0)
    }

    /// Create a vector with the given x and y components; z is 0.
    #[inline]
    #[must_use]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Vector3::new(x, y, 0.0)
    }

    /// Create a vector with `n` on every component.
    #[inline]
    #[must_use]
    pub const fn splat(n: f32) -> Self {
        Vector3::new(n, n, n)
    }

    /// Set x, y and z components of an existing vector.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Copy the components of `other` into this vector.
    #[inline]
    pub fn set_from(&mut self, other: Vector3) {
        *self = other;
    }

    /// Set every component to `n`.
    #[inline]
    pub fn set_all(&mut self, n: f32) {
        self.set(n, n, n);
    }

    /// Exact equality of all three components.
    ///
    /// Same as `==`. `-0.0` equals `0.0` and NaN never equals anything,
    /// following IEEE-754.
    #[inline]
    pub fn equals(&self, other: &Vector3) -> bool {
        self == other
    }

    /// Euclidean length `sqrt(x² + y² + z²)`.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length `x² + y² + z²`, for comparisons that don't need the root.
    #[inline]
    #[must_use]
    pub fn sqr_magnitude(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Copy of this vector with a magnitude of 1.
    ///
    /// A zero vector yields NaN components.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Vector3 {
        self / self.magnitude()
    }

    /// Components as an `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> [f32; 3] {
        v.to_array()
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> nalgebra::Vector3<f32> {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
