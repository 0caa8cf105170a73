//! Quaternion for representing 3D rotations
//!
//! A unit quaternion `w + xi + yj + zk` encodes a rotation by `angle` about a
//! unit `axis` as `(axis * sin(angle / 2), cos(angle / 2))`.
//!
//! Composition follows the matrix convention: `a.mult(&b)` yields the rotation
//! that applies `b` first, then `a`, so that
//! `(a * b).to_matrix() == a.to_matrix() * b.to_matrix()`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{unit_components, MathError};
use crate::{Matrix4, Vector3};

/// Rotation quaternion with vector part (x, y, z) and scalar part w
///
/// Rotation operations assume unit length. Only [`Quaternion::normalize`]
/// and [`Quaternion::inverse`] restore it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation by `angle` radians about a unit `axis`
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Extract the rotation from the upper-left 3x3 block of a matrix
    ///
    /// The block must be a pure rotation; translation is ignored.
    pub fn from_matrix(m: &Matrix4) -> Self {
        // r(row, col) reads the matrix in conventional row/column order
        let r = |row: usize, col: usize| m.get(col, row);
        let trace = r(0, 0) + r(1, 1) + r(2, 2);

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
                0.25 * s,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (1.0 + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(2, 1) - r(1, 2)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (1.0 + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * 2.0;
            Self::new(
                (r(0, 1) + r(1, 0)) / s,
                0.25 * s,
                (r(1, 2) + r(2, 1)) / s,
                (r(0, 2) - r(2, 0)) / s,
            )
        } else {
            let s = (1.0 + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * 2.0;
            Self::new(
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                0.25 * s,
                (r(1, 0) - r(0, 1)) / s,
            )
        }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Restore the identity rotation
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// The vector part (x, y, z)
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, q: &Quaternion) -> f32 {
        self.x * q.x + self.y * q.y + self.z * q.z + self.w * q.w
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length in place
    pub fn normalize(&mut self) -> Result<&mut Self, MathError> {
        let [x, y, z, w] = unit_components([self.x, self.y, self.z, self.w])?;
        Ok(self.set(x, y, z, w))
    }

    /// Unit-length copy of this quaternion
    pub fn normalized(&self) -> Result<Self, MathError> {
        let mut q = *self;
        q.normalize()?;
        Ok(q)
    }

    #[inline]
    pub fn add(&mut self, q: &Quaternion) -> &mut Self {
        self.x += q.x;
        self.y += q.y;
        self.z += q.z;
        self.w += q.w;
        self
    }

    #[inline]
    pub fn sub(&mut self, q: &Quaternion) -> &mut Self {
        self.x -= q.x;
        self.y -= q.y;
        self.z -= q.z;
        self.w -= q.w;
        self
    }

    /// Multiply every component by `f`
    #[inline]
    pub fn mult_scalar(&mut self, f: f32) -> &mut Self {
        self.x *= f;
        self.y *= f;
        self.z *= f;
        self.w *= f;
        self
    }

    /// Hamilton product `self = self * q`: rotate by `q`, then by `self`
    pub fn mult(&mut self, q: &Quaternion) -> &mut Self {
        let Self { x, y, z, w } = *self;

        self.x = w * q.x + x * q.w + y * q.z - z * q.y;
        self.y = w * q.y + y * q.w + z * q.x - x * q.z;
        self.z = w * q.z + z * q.w + x * q.y - y * q.x;
        self.w = w * q.w - x * q.x - y * q.y - z * q.z;
        self
    }

    /// Negate the vector part
    #[inline]
    pub fn conjugate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Normalize, then conjugate
    ///
    /// For a unit quaternion the conjugate is the inverse rotation.
    pub fn inverse(&mut self) -> Result<&mut Self, MathError> {
        Ok(self.normalize()?.conjugate())
    }

    /// Rotate a vector: `v + 2w(q × v) + 2(q × (q × v))`
    ///
    /// Only a pure rotation when `self` has unit length.
    pub fn mult3(&self, v: Vector3) -> Vector3 {
        let q = self.xyz();
        let uv = q.cross(v);
        let uuv = q.cross(uv);

        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    /// Write the rotation matrix into `m`, with identity translation
    pub fn to_matrix_into(&self, m: &mut Matrix4) {
        let Self { x, y, z, w } = *self;

        *m = Matrix4::from_cols_array([
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y + 2.0 * w * z,
            2.0 * x * z - 2.0 * w * y,
            0.0,
            2.0 * x * y - 2.0 * w * z,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z + 2.0 * w * x,
            0.0,
            2.0 * x * z + 2.0 * w * y,
            2.0 * y * z - 2.0 * w * x,
            1.0 - 2.0 * x * x - 2.0 * y * y,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ]);
    }

    /// The rotation as a 4x4 matrix
    pub fn to_matrix(&self) -> Matrix4 {
        let mut m = Matrix4::ZERO;
        self.to_matrix_into(&mut m);
        m
    }

    /// Spherical linear interpolation between two unit quaternions
    ///
    /// Takes the shorter arc. Falls back to a normalized lerp when the
    /// rotations are nearly parallel.
    pub fn slerp(&self, other: &Quaternion, t: f32) -> Result<Self, MathError> {
        let mut end = *other;
        let mut cos_theta = self.dot(other);
        if cos_theta < 0.0 {
            end.mult_scalar(-1.0);
            cos_theta = -cos_theta;
        }

        let (a, b) = if cos_theta > 0.9995 {
            (1.0 - t, t)
        } else {
            let theta = cos_theta.acos();
            let sin_theta = theta.sin();
            (
                ((1.0 - t) * theta).sin() / sin_theta,
                (t * theta).sin() / sin_theta,
            )
        };

        let mut result = *self;
        result.mult_scalar(a).add(end.mult_scalar(b));
        result.normalized()
    }

    /// Components as a flat `[x, y, z, w]` buffer
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Components as raw bytes, ready for upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        let mut result = self;
        result.mult(&other);
        result
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, f: f32) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f, self.w * f)
    }
}

impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        self.mult3(v)
    }
}
