//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check_length, unit_components, MathError};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vector2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector with every component set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Zero every component
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    #[inline]
    pub fn add(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
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
        self
    }

    #[inline]
    pub fn mult_scalar(&mut self, f: f32) -> &mut Self {
        self.mult(Self::splat(f))
    }

    /// Component-wise division
    #[inline]
    pub fn divide(&mut self, other: Self) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    #[inline]
    pub fn divide_scalar(&mut self, f: f32) -> &mut Self {
        self.divide(Self::splat(f))
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
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
        let [x, y] = unit_components([self.x, self.y])?;
        Ok(self.set(x, y))
    }

    /// Unit-length copy of this vector
    pub fn normalized(self) -> Result<Self, MathError> {
        let mut v = self;
        v.normalize()?;
        Ok(v)
    }

    /// Components as a flat `[x, y]` buffer
    #[inline]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    /// Components as raw bytes, ready for upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl TryFrom<&[f32]> for Vector2 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        check_length(values, 2)?;
        Ok(Self::new(values[0], values[1]))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
