//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check_length, unit_components, MathError};
use crate::Vector2;

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector with every component set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Promote a Vector2, supplying the z component
    #[inline]
    pub const fn from_vec2(v: Vector2, z: f32) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[inline]
    pub fn set_vec2(&mut self, v: Vector2, z: f32) -> &mut Self {
        self.set(v.x, v.y, z)
    }

    /// Zero every component
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn add(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
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
        self
    }

    #[inline]
    pub fn sub_scalar(&mut self, f: f32) -> &mut Self {
        self.sub(Self::splat(f))
    }

    /// Component-wise multiplication
    #[inline]
    pub fn mult(&mut self, other: Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
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
        self
    }

    #[inline]
    pub fn divide_scalar(&mut self, f: f32) -> &mut Self {
        self.divide(Self::splat(f))
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product (right-handed)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    ///
    /// Fails with [`MathError::ZeroLength`] and leaves the vector untouched
    /// when its length is zero.
    pub fn normalize(&mut self) -> Result<&mut Self, MathError> {
        let [x, y, z] = unit_components([self.x, self.y, self.z])?;
        Ok(self.set(x, y, z))
    }

    /// Unit-length copy of this vector
    pub fn normalized(self) -> Result<Self, MathError> {
        let mut v = self;
        v.normalize()?;
        Ok(v)
    }

    /// Components as a flat `[x, y, z]` buffer
    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Components as raw bytes, ready for upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl TryFrom<&[f32]> for Vector3 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_length(values, 3)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
