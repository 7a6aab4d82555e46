//! Approximate comparison through the `approx` traits.
//!
//! `==` on [`Vector3`] is exact. For "close enough" use the `approx` macros,
//! which compare component by component and default to
//! [`EPSILON`](crate::constants::EPSILON):
//!
//! ```
//! use approx::{abs_diff_eq, relative_eq};
//! use vector3_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(1.0, 2.0, 3.000001);
//! assert_ne!(a, b);
//! assert!(abs_diff_eq!(a, b));
//! assert!(relative_eq!(a, b, max_relative = 1e-6));
//! ```

use crate::constants::EPSILON;
use crate::Vector3;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

impl AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
