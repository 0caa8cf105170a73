//! Algebraic properties of the math types
//!
//! These tests check the identities the scenes rely on:
//! 1. Inverses cancel (matrices and quaternions)
//! 2. Normalization yields unit length
//! 3. Quaternion, matrix and direct vector rotation agree
//! 4. Matrix composition is associative
//! 5. Extreme magnitudes either fail or give finite, correct results

use gltut_math::{MathError, Matrix3, Matrix4, Quaternion, Vector2, Vector3, Vector4};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx_eq(a: Vector3, b: Vector3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn slice_approx_eq(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y))
}

/// A few well-conditioned, invertible transforms
fn sample_transforms() -> Vec<Matrix4> {
    let mut a = Matrix4::IDENTITY;
    a.translate(Vector3::new(1.0, -2.0, 3.0))
        .rotate(0.7, Vector3::new(1.0, 1.0, 0.0))
        .unwrap()
        .scale(Vector3::new(2.0, 0.5, 1.5));

    let mut b = Matrix4::IDENTITY;
    b.rotate(-1.3, Vector3::Y).unwrap().translate(Vector3::new(0.0, 4.0, -1.0));

    let c = Matrix4::from_cols_array([
        1.0, 2.0, 0.0, 0.0, //
        0.0, 1.0, 3.0, 0.0, //
        4.0, 0.0, 1.0, 0.0, //
        0.5, 0.5, 0.5, 1.0,
    ]);

    vec![a, b, c]
}

// ==================== Inverse Tests ====================

#[test]
fn test_matrix4_times_inverse_is_identity() {
    for m in sample_transforms() {
        let mut inv = m;
        inv.inverse().unwrap();
        let mut product = m;
        product.mult(&inv);
        assert!(
            slice_approx_eq(product.as_array(), Matrix4::IDENTITY.as_array()),
            "M * M^-1 = {:?}",
            product
        );
    }
}

#[test]
fn test_matrix3_times_inverse_is_identity() {
    for m4 in sample_transforms() {
        let mut m = Matrix3::ZERO;
        m.set4x4(&m4);
        let mut inv = m;
        inv.inverse().unwrap();
        m.mult(&inv);
        assert!(slice_approx_eq(m.as_array(), Matrix3::IDENTITY.as_array()), "got {:?}", m);
    }
}

#[test]
fn test_diagonal_matrix3_inverse() {
    let mut m = Matrix3::ZERO;
    m.put(0, 0, 2.0).put(1, 1, 3.0).put(2, 2, 4.0);
    assert_eq!(m.determinant(), 24.0);

    m.inverse().unwrap();
    assert!(approx_eq(m.get(0, 0), 0.5));
    assert!(approx_eq(m.get(1, 1), 0.333_333));
    assert!(approx_eq(m.get(2, 2), 0.25));
}

#[test]
fn test_zero_matrix3_inverse_fails() {
    let mut m = Matrix3::ZERO;
    assert_eq!(m.inverse().unwrap_err(), MathError::SingularMatrix);
    assert!(m.as_array().iter().all(|v| v.is_finite()));
}

#[test]
fn test_unit_quaternion_times_inverse_is_identity() {
    let axes = [Vector3::X, Vector3::new(0.0, 0.6, 0.8), Vector3::new(-0.48, 0.6, 0.64)];
    for (i, axis) in axes.into_iter().enumerate() {
        let q = Quaternion::from_axis_angle(axis, 0.4 + i as f32);
        let mut inv = q;
        inv.inverse().unwrap();
        let mut product = q;
        product.mult(&inv);
        assert!(
            slice_approx_eq(product.as_array(), Quaternion::IDENTITY.as_array()),
            "q * q^-1 = {}",
            product
        );
    }
}

// ==================== Normalization Tests ====================

#[test]
fn test_normalized_vectors_have_unit_length() {
    let mut v2 = Vector2::new(-3.0, 7.0);
    assert!(approx_eq(v2.normalize().unwrap().length(), 1.0));

    for v in [Vector3::new(1.0, 2.0, 3.0), Vector3::new(-0.01, 0.0, 0.02), Vector3::splat(100.0)] {
        let mut copy = v;
        assert!(approx_eq(copy.normalize().unwrap().length(), 1.0));
        // The original is untouched
        assert_ne!(copy, v);
    }

    let mut v4 = Vector4::new(1.0, -1.0, 2.0, -2.0);
    assert!(approx_eq(v4.normalize().unwrap().length(), 1.0));
}

#[test]
fn test_zero_length_normalize_fails_everywhere() {
    assert_eq!(Vector2::ZERO.normalized(), Err(MathError::ZeroLength));
    assert_eq!(Vector3::ZERO.normalized(), Err(MathError::ZeroLength));
    assert_eq!(Vector4::ZERO.normalized(), Err(MathError::ZeroLength));
    assert_eq!(
        Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized(),
        Err(MathError::ZeroLength)
    );
}

// ==================== Extreme Magnitude Tests ====================

const MAGNITUDES: [f32; 8] = [1e-30, 1e-13, 1e-6, 1.0, 1e6, 1e13, 1e20, 1e30];

fn all_finite(values: &[f32]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[test]
fn test_normalize_any_magnitude() {
    for s in MAGNITUDES {
        let v2 = Vector2::new(-3.0 * s, 4.0 * s).normalized().unwrap();
        assert!(all_finite(v2.as_array()) && approx_eq(v2.length(), 1.0), "{} -> {}", s, v2);

        let v3 = Vector3::new(s, -2.0 * s, 2.0 * s).normalized().unwrap();
        assert!(all_finite(v3.as_array()) && approx_eq(v3.length(), 1.0), "{} -> {}", s, v3);
        assert!(vec3_approx_eq(v3, Vector3::new(1.0 / 3.0, -2.0 / 3.0, 2.0 / 3.0)));

        let v4 = Vector4::splat(s).normalized().unwrap();
        assert!(all_finite(v4.as_array()) && approx_eq(v4.length(), 1.0), "{} -> {}", s, v4);

        let q = Quaternion::new(0.0, s, 0.0, s).normalized().unwrap();
        assert!(all_finite(q.as_array()) && approx_eq(q.length(), 1.0), "{} -> {}", s, q);
    }
}

#[test]
fn test_quaternion_inverse_any_magnitude() {
    let unit = Quaternion::from_axis_angle(Vector3::new(0.0, 0.6, 0.8), 0.9);
    for s in MAGNITUDES {
        let mut inv = unit * s;
        inv.inverse().unwrap();
        assert!(all_finite(inv.as_array()), "{} -> {}", s, inv);

        let product = unit * inv;
        assert!(
            slice_approx_eq(product.as_array(), Quaternion::IDENTITY.as_array()),
            "{} -> {}",
            s,
            product
        );
    }
}

#[test]
fn test_diagonal_inverse_any_magnitude() {
    for s in MAGNITUDES {
        let mut m3 = Matrix3::ZERO;
        m3.put(0, 0, s).put(1, 1, s).put(2, 2, s);
        let mut inv3 = m3;
        if inv3.inverse().is_ok() {
            assert!(all_finite(inv3.as_array()), "{} -> {:?}", s, inv3);
            m3.mult(&inv3);
            assert!(slice_approx_eq(m3.as_array(), Matrix3::IDENTITY.as_array()), "{}", s);
        } else {
            assert_eq!(inv3, m3);
        }

        let mut m4 = Matrix4::IDENTITY;
        m4.scale(Vector3::splat(s));
        let mut inv4 = m4;
        if inv4.inverse().is_ok() {
            assert!(all_finite(inv4.as_array()), "{} -> {:?}", s, inv4);
            m4.mult(&inv4);
            assert!(slice_approx_eq(m4.as_array(), Matrix4::IDENTITY.as_array()), "{}", s);
        } else {
            assert_eq!(inv4, m4);
        }
    }

    // Representable inverses must not be rejected
    let mut tiny = Matrix4::IDENTITY;
    tiny.scale(Vector3::splat(1e-13));
    assert!(tiny.inverse().is_ok());
}

#[test]
fn test_scaled_transform_inverse() {
    for s in [1e-9, 1e-3, 1e3, 1e9] {
        for mut m in sample_transforms() {
            m.scale(Vector3::splat(s));
            let mut inv = m;
            inv.inverse().unwrap();
            assert!(all_finite(inv.as_array()));
            m.mult(&inv);
            assert!(
                slice_approx_eq(m.as_array(), Matrix4::IDENTITY.as_array()),
                "scale {}: {:?}",
                s,
                m
            );
        }
    }
}

// ==================== Rotation Tests ====================

#[test]
fn test_quaternion_matrix_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
    let m = q.to_matrix();

    let via_matrix = m.mult4(Vector4::new(1.0, 0.0, 0.0, 1.0)).xyz();
    let direct = q.mult3(Vector3::new(1.0, 0.0, 0.0));

    assert!(vec3_approx_eq(via_matrix, direct));
    assert!(vec3_approx_eq(direct, Vector3::new(0.0, 1.0, 0.0)));

    let back = Quaternion::from_matrix(&m);
    assert!(slice_approx_eq(back.as_array(), q.as_array()));
}

#[test]
fn test_identity_quaternion_is_noop() {
    let v = Vector3::new(5.0, 6.0, 7.0);
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 1.0).mult3(v), v);
}

#[test]
fn test_cross_product_basis() {
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn test_set4x4_identity() {
    let mut m = Matrix3::ZERO;
    m.set4x4(&Matrix4::IDENTITY);
    assert_eq!(m, Matrix3::IDENTITY);
}

#[test]
fn test_rotation_matrix_normal_matrix_is_itself() {
    let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.6, 0.8), 1.1);
    let model = q.to_matrix();
    let normal = Matrix3::normal_matrix(&model).unwrap();
    let mut linear = Matrix3::ZERO;
    linear.set4x4(&model);
    assert!(slice_approx_eq(normal.as_array(), linear.as_array()));
}

// ==================== Composition Tests ====================

#[test]
fn test_matrix4_mult_is_associative() {
    let t = sample_transforms();
    let (a, b, c) = (t[0], t[1], t[2]);

    let mut left = a;
    left.mult(&b).mult(&c);

    let mut bc = b;
    bc.mult(&c);
    let mut right = a;
    right.mult(&bc);

    assert!(slice_approx_eq(left.as_array(), right.as_array()));
}

#[test]
fn test_quaternion_composition_matches_matrices() {
    let a = Quaternion::from_axis_angle(Vector3::X, 0.5);
    let b = Quaternion::from_axis_angle(Vector3::new(0.0, 0.6, 0.8), -1.2);

    let mut composed = a;
    composed.mult(&b);

    let mut m = a.to_matrix();
    m.mult(&b.to_matrix());

    assert!(slice_approx_eq(composed.to_matrix().as_array(), m.as_array()));
}
