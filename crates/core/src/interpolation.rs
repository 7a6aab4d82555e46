//! Interpolation and motion toward a target.
//!
//! `lerp`/`slerp` clamp their factor to `[0, 1]`; the `_unclamped` forms
//! extrapolate. `move_towards` and `rotate_towards` take bounded steps and
//! never overshoot. `smooth_damp` is a critically damped spring that carries
//! its velocity between calls through a `&mut Vector3`.

use crate::constants::SMOOTH_TIME_MIN;
use crate::geometry::orthogonal_unit;
use crate::Vector3;
use std::f32::consts::PI;
use tracing::{debug, trace};

impl Vector3 {
    /// Linear interpolation from `self` to `target`, with `t` clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn lerp(self, target: Vector3, t: f32) -> Vector3 {
        self.lerp_unclamped(target, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation from `self` to `target` with `t` used as given.
    ///
    /// `t = 0` returns `self` and `t = 1` returns `target` exactly; other
    /// values outside `[0, 1]` extrapolate along the line.
    #[inline]
    #[must_use]
    pub fn lerp_unclamped(self, target: Vector3, t: f32) -> Vector3 {
        self * (1.0 - t) + target * t
    }

    /// Move `self` in a straight line toward `target` by at most
    /// `max_distance_delta`.
    ///
    /// Returns `target` once it is within reach, including when `self` already
    /// equals it. A negative delta moves away from `target`.
    #[must_use]
    pub fn move_towards(self, target: Vector3, max_distance_delta: f32) -> Vector3 {
        let to_target = target - self;
        let sqr_distance = to_target.sqr_magnitude();
        if sqr_distance == 0.0
            || (max_distance_delta >= 0.0
                && sqr_distance <= max_distance_delta * max_distance_delta)
        {
            return target;
        }
        self + to_target * (max_distance_delta / sqr_distance.sqrt())
    }

    /// Rotate `self` toward `target` by at most `max_radians_delta`, while its
    /// magnitude moves toward `target`'s by at most `max_magnitude_delta`.
    ///
    /// The direction turns about the axis `self × target` and stops on
    /// `target`'s direction. A negative angle turns away, no further than
    /// the opposite direction, and a NaN angle gives NaN components. If either
    /// vector is zero the call degrades to [`Vector3::move_towards`] with
    /// `max_magnitude_delta`.
    #[must_use]
    pub fn rotate_towards(
        self,
        target: Vector3,
        max_radians_delta: f32,
        max_magnitude_delta: f32,
    ) -> Vector3 {
        let current_len = self.magnitude();
        let target_len = target.magnitude();
        if current_len == 0.0 || target_len == 0.0 {
            trace!("rotate_towards: zero-length input, moving in a straight line");
            return self.move_towards(target, max_magnitude_delta);
        }

        let from = self / current_len;
        let to = target / target_len;
        let angle = from.angle(to);
        let direction = if max_radians_delta.is_nan() {
            Vector3::splat(f32::NAN)
        } else if max_radians_delta >= angle {
            to
        } else {
            turn_towards(from, to, max_radians_delta.max(angle - PI))
        };

        direction * move_scalar_towards(current_len, target_len, max_magnitude_delta)
    }

    /// Spherical interpolation from `self` to `target`, with `t` clamped to
    /// `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn slerp(self, target: Vector3, t: f32) -> Vector3 {
        self.slerp_unclamped(target, t.clamp(0.0, 1.0))
    }

    /// Spherical interpolation with `t` used as given.
    ///
    /// The direction sweeps the great-circle arc from `self` to `target` at a
    /// constant angular rate while the magnitude is interpolated linearly.
    /// Opposite vectors turn about an arbitrary perpendicular axis. If either
    /// vector is zero this is [`Vector3::lerp_unclamped`].
    #[must_use]
    pub fn slerp_unclamped(self, target: Vector3, t: f32) -> Vector3 {
        let from_len = self.magnitude();
        let to_len = target.magnitude();
        if from_len == 0.0 || to_len == 0.0 {
            trace!("slerp: zero-length input, interpolating linearly");
            return self.lerp_unclamped(target, t);
        }

        let from = self / from_len;
        let to = target / to_len;
        let direction = turn_towards(from, to, from.angle(to) * t);
        direction * (from_len * (1.0 - t) + to_len * t)
    }

    /// Gradually move `self` toward `target` like a critically damped spring.
    ///
    /// `velocity` is read and updated in place and must be carried between
    /// calls. `smooth_time` is roughly the time to reach the target (floored at
    /// [`SMOOTH_TIME_MIN`]), `max_speed` caps the speed (`f32::INFINITY` for no
    /// cap) and `delta_time` is the time since the last call. The result never
    /// passes the target.
    ///
    /// ```
    /// use vector3_core::Vector3;
    ///
    /// let target = Vector3::new(10.0, 0.0, 0.0);
    /// let mut position = Vector3::ZERO;
    /// let mut velocity = Vector3::ZERO;
    /// for _ in 0..600 {
    ///     position = position.smooth_damp(target, &mut velocity, 0.5, f32::INFINITY, 1.0 / 60.0);
    /// }
    /// assert!(position.distance(target) < 1e-3);
    /// ```
    #[must_use]
    pub fn smooth_damp(
        self,
        target: Vector3,
        velocity: &mut Vector3,
        smooth_time: f32,
        max_speed: f32,
        delta_time: f32,
    ) -> Vector3 {
        // Game Programming Gems 4, ch. 1.10
        let smooth_time = smooth_time.max(SMOOTH_TIME_MIN);
        let omega = 2.0 / smooth_time;
        let x = omega * delta_time;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let max_change = max_speed * smooth_time;
        let mut change = self - target;
        if change.sqr_magnitude() > max_change * max_change {
            debug!(max_speed, "smooth_damp: limiting change to max speed");
            change = change.clamp_magnitude(max_change);
        }
        let goal = self - change;

        let temp = (*velocity + change * omega) * delta_time;
        *velocity = (*velocity - temp * omega) * decay;
        let mut output = goal + (change + temp) * decay;

        // Snap to the original target instead of passing it
        if (target - self).dot(output - target) > 0.0 {
            output = target;
            *velocity = Vector3::ZERO;
        }
        output
    }
}

/// Turn the unit vector `from` by `radians` in the plane it shares with the
/// unit vector `to`, toward `to` for positive angles.
fn turn_towards(from: Vector3, to: Vector3, radians: f32) -> Vector3 {
    let perpendicular = orthogonal_unit(from, to);
    let (sin, cos) = radians.sin_cos();
    from * cos + perpendicular * sin
}

/// Scalar counterpart of [`Vector3::move_towards`].
fn move_scalar_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
