//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check_length, unit_components, MathError};
use crate::{Vector2, Vector3};

/// 4D Vector with x, y, z, w components
///
/// Used for homogeneous positions (w = 1), directions (w = 0) and colors.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Vector with every component set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }

    /// Promote a Vector2, supplying z and w
    #[inline]
    pub const fn from_vec2(v: Vector2, z: f32, w: f32) -> Self {
        Self { x: v.x, y: v.y, z, w }
    }

    /// Promote a Vector3, supplying w
    #[inline]
    pub const fn from_vec3(v: Vector3, w: f32) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    #[inline]
    pub fn set_vec2(&mut self, v: Vector2, z: f32, w: f32) -> &mut Self {
        self.set(v.x, v.y, z, w)
    }

    #[inline]
    pub fn set_vec3(&mut self, v: Vector3, w: f32) -> &mut Self {
        self.set(v.x, v.y, v.z, w)
    }

    /// Zero every component
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn add(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
        self
    }

    /// Add `f` to every component
    #[inline]
    pub fn add_scalar(&mut self, f: f32) -> &mut Self {
        self.add(Self::splat(f))
    }

    #[inline]
    pub fn sub(&mut self, other: Self) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
        self
    }

    #[inline]
    pub fn sub_scalar(&mut self, f: f32) -> &mut Self {
        self.sub(Self::splat(f))
    }

    /// Component-wise multiplication (Hadamard product)
    #[inline]
    pub fn mult(&mut self, other: Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
        self
    }

    /// Multiply every component by `f`
    #[inline]
    pub fn mult_scalar(&mut self, f: f32) -> &mut Self {
        self.mult(Self::splat(f))
    }

    /// Component-wise division
    #[inline]
    pub fn divide(&mut self, other: Self) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
        self.w /= other.w;
        self
    }

    #[inline]
    pub fn divide_scalar(&mut self, f: f32) -> &mut Self {
        self.divide(Self::splat(f))
    }

    /// Per-component floating remainder; the result has the sign of the dividend
    #[inline]
    pub fn modulo(&mut self, f: f32) -> &mut Self {
        self.x %= f;
        self.y %= f;
        self.z %= f;
        self.w %= f;
        self
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length in place
    pub fn normalize(&mut self) -> Result<&mut Self, MathError> {
        let [x, y, z, w] = unit_components([self.x, self.y, self.z, self.w])?;
        Ok(self.set(x, y, z, w))
    }

    /// Unit-length copy of this vector
    pub fn normalized(self) -> Result<Self, MathError> {
        let mut v = self;
        v.normalize()?;
        Ok(v)
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
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

impl From<[f32; 4]> for Vector4 {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl TryFrom<&[f32]> for Vector4 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_length(values, 4)?;
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// Operator overloads

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::MulAssign<f32> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl std::ops::Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl std::ops::Rem<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn rem(self, f: f32) -> Self {
        Self::new(self.x % f, self.y % f, self.z % f, self.w % f)
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_promotion() {
        let v = Vector4::from_vec3(Vector3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let v = Vector4::from_vec2(Vector2::new(1.0, 2.0), 3.0, 4.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));

        let mut v = Vector4::ZERO;
        v.set_vec3(Vector3::X, 0.5);
        assert_eq!(v, Vector4::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(v.length(), 1.0);

        let v2 = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v2.length() - 2.0).abs() < 0.0001);
        assert_eq!(v2.length_squared(), 4.0);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector4::new(3.0, 0.0, 0.0, 0.0);
        v.normalize().unwrap();
        assert!((v.x - 1.0).abs() < 0.0001);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, 0.0);
        assert_eq!(v.w, 0.0);
    }

    #[test]
    fn test_normalize_zero_fails() {
        let mut v = Vector4::ZERO;
        assert_eq!(v.normalize().unwrap_err(), MathError::ZeroLength);
        assert_eq!(v, Vector4::ZERO);
    }

    #[test]
    fn test_in_place_arithmetic() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        v.add(Vector4::splat(1.0)).sub(Vector4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(v, Vector4::new(2.0, 2.0, 4.0, 4.0));
        v.divide(Vector4::new(2.0, 2.0, 4.0, 4.0));
        assert_eq!(v, Vector4::splat(1.0));
        v.mult(Vector4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        let mut v = Vector4::new(5.5, -5.5, 3.0, -1.0);
        v.modulo(2.0);
        assert_eq!(v, Vector4::new(1.5, -1.5, 1.0, -1.0));
        assert_eq!(Vector4::new(7.0, -7.0, 0.0, 1.0) % 3.0, Vector4::new(1.0, -1.0, 0.0, 1.0));
    }

    #[test]
    fn test_try_from_slice() {
        let values: &[f32] = &[1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(Vector4::try_from(values).unwrap(), Vector4::new(1.0, 2.0, 3.0, 4.0));

        let short: &[f32] = &[1.0, 2.0];
        assert_eq!(
            Vector4::try_from(short).unwrap_err(),
            MathError::InvalidLength { expected: 4, actual: 2 }
        );
    }

    #[test]
    fn test_as_array_is_snapshot_order() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        v.x = 9.0;
        assert_eq!(v.as_array(), &[9.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.as_bytes().len(), 16);
    }

    #[test]
    fn test_xyz() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_lerp() {
        let a = Vector4::ZERO;
        let b = Vector4::splat(10.0);
        assert_eq!(a.lerp(b, 0.5), Vector4::splat(5.0));
    }

    #[test]
    fn test_neg() {
        let v = Vector4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vector4::new(-1.0, 2.0, -3.0, 4.0));
    }
}
