//! Numeric tolerances shared by the vector operations.

/// Default absolute tolerance for approximate comparisons and for detecting
/// directions that are too short or too close to parallel to divide by.
pub const EPSILON: f32 = 1e-5;

/// Squared form of [`EPSILON`], compared against squared magnitudes.
pub const EPSILON_SQUARED: f32 = EPSILON * EPSILON;

/// Lower bound applied to the `smooth_time` argument of
/// [`Vector3::smooth_damp`](crate::Vector3::smooth_damp).
pub const SMOOTH_TIME_MIN: f32 = 1e-4;
