//! Vector3 Core Library
//!
//! A single-precision 3D vector value type for graphics and physics code.
//!
//! ## Operation set
//!
//! - Construction, in-place mutation and exact equality ([`Vector3`])
//! - Products, distances, angles, projection and reflection ([`geometry`])
//! - Linear/spherical interpolation and motion toward a target ([`interpolation`])
//! - Component-wise and scalar operators ([`ops`])
//! - Tolerance-based comparison through the `approx` traits ([`tolerance`])
//!
//! ## Degenerate input
//!
//! Nothing in this crate returns an error. Dividing by a zero magnitude follows
//! IEEE-754 and yields NaN/Infinity components (`Vector3::ZERO.normalized()` is
//! all NaN). Operations that have a well-defined answer for a degenerate input,
//! such as [`Vector3::move_towards`] with `current == target`, return it
//! without dividing.
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 0.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.normalize();
//! assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
//! assert_eq!(v.to_string(), "(0.6, 0, 0.8)");
//! ```

pub mod constants;
pub mod format;
pub mod geometry;
pub mod interpolation;
pub mod ops;
pub mod tolerance;
pub mod vector3;

pub use vector3::Vector3;
