//! Property checks over random vectors
//!
//! Each property is sampled over a fixed-seed RNG so failures are reproducible.
//! Set `RUST_LOG=vector3_core=trace` to see fallback paths taken.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3_core::Vector3;

const SAMPLES: usize = 500;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_7EC3)
}

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn random_unit(rng: &mut StdRng) -> Vector3 {
    loop {
        let v = random_vector(rng);
        if v.sqr_magnitude() > 1.0 {
            return v.normalized();
        }
    }
}

#[test]
fn test_dot_self_is_sqr_magnitude() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_relative_eq!(v.dot(v), v.sqr_magnitude(), max_relative = 1e-6);
    }
}

#[test]
fn test_normalized_has_unit_magnitude() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let mut v = random_vector(&mut rng);
        Vector3::normalize(&mut v);
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_cross_anticommutes_and_is_orthogonal() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = Vector3::cross(a, b);
        assert_eq!(c, -Vector3::cross(b, a));

        let scale = a.magnitude() * b.magnitude() * c.magnitude();
        assert!(c.dot(a).abs() <= scale * 1e-5, "cross not orthogonal to a");
        assert!(c.dot(b).abs() <= scale * 1e-5, "cross not orthogonal to b");
    }
}

#[cfg(feature = "nalgebra")]
#[test]
fn test_matches_nalgebra() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let na: nalgebra::Vector3<f32> = a.into();
        let nb: nalgebra::Vector3<f32> = b.into();

        assert_abs_diff_eq!(a.cross(b), Vector3::from(na.cross(&nb)), epsilon = 1e-2);
        assert_relative_eq!(a.dot(b), na.dot(&nb), epsilon = 1e-2, max_relative = 1e-5);
        assert_relative_eq!(a.magnitude(), na.norm(), max_relative = 1e-6);
        assert_abs_diff_eq!(a.angle(b), na.angle(&nb), epsilon = 1e-3);
    }
}

#[test]
fn test_lerp_endpoints_and_clamp() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let t: f32 = rng.random_range(1.0..10.0);

        assert_eq!(Vector3::lerp(a, b, 0.0), a);
        assert_eq!(Vector3::lerp(a, b, 1.0), b);
        assert_eq!(Vector3::lerp(a, b, t), b);
        assert_eq!(Vector3::lerp(a, b, -t), a);
    }
}

#[test]
fn test_lerp_unclamped_extrapolates() {
    let v = Vector3::lerp_unclamped(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0), 2.0);
    assert_eq!(v, Vector3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_distance_symmetric_and_zero_on_self() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(Vector3::distance(a, b), Vector3::distance(b, a));
        assert_eq!(Vector3::distance(a, a), 0.0);
    }
}

#[test]
fn test_move_towards_never_overshoots() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let current = random_vector(&mut rng);
        let target = random_vector(&mut rng);
        let max_delta: f32 = rng.random_range(0.0..400.0);

        let moved = Vector3::move_towards(current, target, max_delta);
        let expected = (current.distance(target) - max_delta).max(0.0);
        assert_abs_diff_eq!(moved.distance(target), expected, epsilon = 1e-3);
        assert!(moved.distance(current) <= max_delta * (1.0 + 1e-5) + 1e-5);
    }
}

#[test]
fn test_reflect_is_self_inverse() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let n = random_unit(&mut rng);
        let twice = v.reflect(n).reflect(n);
        assert_abs_diff_eq!(twice, v, epsilon = 1e-3);
        assert_relative_eq!(v.reflect(n).magnitude(), v.magnitude(), max_relative = 1e-4);
    }
}

#[test]
fn test_project_and_project_on_plane_split_the_vector() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let n = random_vector(&mut rng);
        let parallel = v.project(n);
        let planar = v.project_on_plane(n);

        assert_abs_diff_eq!(parallel + planar, v, epsilon = 1e-3);
        assert!(planar.dot(n).abs() <= v.magnitude() * n.magnitude() * 1e-5);
        assert_abs_diff_eq!(parallel.cross(n).magnitude(), 0.0, epsilon = 1e-1);
    }
}

#[test]
fn test_clamp_magnitude_bounds_and_preserves_direction() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let max_length: f32 = rng.random_range(0.1..200.0);
        let clamped = v.clamp_magnitude(max_length);

        if v.sqr_magnitude() <= max_length * max_length {
            assert_eq!(clamped, v);
        } else {
            assert_relative_eq!(clamped.magnitude(), max_length, epsilon = 1e-4, max_relative = 1e-5);
            assert_abs_diff_eq!(clamped.angle(v), 0.0, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_scale_mutates_in_place() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    Vector3::scale(&mut v, Vector3::new(2.0, 2.0, 2.0));
    assert_eq!(v, Vector3::new(2.0, 4.0, 6.0));
}

#[test]
fn test_ortho_normalize_builds_orthonormal_basis() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let mut a = random_vector(&mut rng);
        let mut b = random_vector(&mut rng);
        let mut c = random_vector(&mut rng);
        Vector3::ortho_normalize3(&mut a, &mut b, &mut c);

        for v in [a, b, c] {
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-4);
        }
        assert_abs_diff_eq!(a.dot(b), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(a.dot(c), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(b.dot(c), 0.0, epsilon = 1e-4);
    }
}

#[test]
fn test_signed_angle_magnitude_matches_angle() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let axis = a.cross(b);
        assert_eq!(a.signed_angle(b, axis), a.angle(b));
        assert_eq!(a.signed_angle(b, -axis), -a.angle(b));
    }
}

#[test]
fn test_rotate_towards_bounds_step() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let current = random_vector(&mut rng);
        let target = random_vector(&mut rng);
        let max_radians: f32 = rng.random_range(0.0..3.5);
        let max_magnitude: f32 = rng.random_range(0.0..50.0);

        let rotated = current.rotate_towards(target, max_radians, max_magnitude);
        let turned = current.angle(rotated);
        let expected_turn = current.angle(target).min(max_radians);
        assert_abs_diff_eq!(turned, expected_turn, epsilon = 1e-3);

        let expected_len = if (target.magnitude() - current.magnitude()).abs() <= max_magnitude {
            target.magnitude()
        } else {
            current.magnitude() + (target.magnitude() - current.magnitude()).signum() * max_magnitude
        };
        assert_relative_eq!(rotated.magnitude(), expected_len, epsilon = 1e-3, max_relative = 1e-4);
    }
}

#[test]
fn test_slerp_stays_on_arc() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_unit(&mut rng);
        let b = random_unit(&mut rng);
        let t: f32 = rng.random_range(0.0..1.0);
        let s = a.slerp(b, t);

        assert_relative_eq!(s.magnitude(), 1.0, epsilon = 1e-4);
        let total = a.angle(b);
        assert_abs_diff_eq!(a.angle(s), total * t, epsilon = 1e-3);
        assert_abs_diff_eq!(s.angle(b), total * (1.0 - t), epsilon = 1e-3);
    }
}

#[test]
fn test_equality_is_exact() {
    assert!(Vector3::new(1.0, 2.0, 3.0) == Vector3::new(1.0, 2.0, 3.0));
    assert!(Vector3::new(1.0, 2.0, 3.0) != Vector3::new(1.0, 2.0, 3.0001));
}

#[test]
fn test_to_string_renders_components() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let bare = v.to_string_wrapped(false);
    assert_eq!(bare, "1, 2, 3");
    assert_eq!(v.to_string_wrapped(true), format!("({bare})"));
    assert_eq!(v.to_string(), "(1, 2, 3)");
}
