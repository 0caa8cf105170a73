//! 3x3 Matrix type
//!
//! Mostly used for the linear part of a transform: rotations and the
//! normal matrix fed to lighting shaders.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{check_length, MathError};
use crate::{Matrix4, Vector3};

/// 3x3 matrix stored as a flat column-major array (`index = col * 3 + row`)
///
/// The default value is the zero matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix3 {
    matrix: [f32; 9],
}

impl Matrix3 {
    /// Number of coefficients
    pub const LENGTH: usize = 9;

    pub const ZERO: Self = Self { matrix: [0.0; 9] };

    pub const IDENTITY: Self = Self {
        matrix: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    /// Create a zero matrix
    #[inline]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create a matrix from a column-major array
    #[inline]
    pub const fn from_cols_array(matrix: [f32; 9]) -> Self {
        Self { matrix }
    }

    /// Create a matrix from the first nine values of a column-major slice
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        let mut m = Self::ZERO;
        m.set(values)?;
        Ok(m)
    }

    /// Zero all coefficients
    pub fn clear(&mut self) -> &mut Self {
        self.matrix = [0.0; Self::LENGTH];
        self
    }

    /// Reset to the identity matrix
    pub fn clear_to_identity(&mut self) -> &mut Self {
        self.clear().put_index(0, 1.0).put_index(4, 1.0).put_index(8, 1.0)
    }

    /// Coefficient at a raw column-major index
    #[inline]
    pub fn get_index(&self, index: usize) -> f32 {
        self.matrix[index]
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.matrix[col * 3 + row]
    }

    #[inline]
    pub fn put_index(&mut self, index: usize, value: f32) -> &mut Self {
        self.matrix[index] = value;
        self
    }

    #[inline]
    pub fn put(&mut self, col: usize, row: usize, value: f32) -> &mut Self {
        self.matrix[col * 3 + row] = value;
        self
    }

    pub fn put_column(&mut self, col: usize, v: Vector3) -> &mut Self {
        self.put(col, 0, v.x).put(col, 1, v.y).put(col, 2, v.z)
    }

    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::new(self.get(col, 0), self.get(col, 1), self.get(col, 2))
    }

    /// Copy coefficients from a column-major slice of at least nine values
    ///
    /// Extra values are ignored. A short slice leaves the matrix untouched.
    pub fn set(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        check_length(values, Self::LENGTH)?;
        self.matrix.copy_from_slice(&values[..Self::LENGTH]);
        Ok(self)
    }

    /// Copy the upper-left 3x3 block of a 4x4 matrix, dropping translation
    pub fn set4x4(&mut self, m: &Matrix4) -> &mut Self {
        for col in 0..3 {
            for row in 0..3 {
                self.put(col, row, m.get(col, row));
            }
        }
        self
    }

    /// Scale every coefficient
    pub fn mult_scalar(&mut self, f: f32) -> &mut Self {
        for value in self.matrix.iter_mut() {
            *value *= f;
        }
        self
    }

    /// Multiply by a matrix given as a column-major slice
    pub fn mult_slice(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        let m = Self::from_slice(values)?;
        Ok(self.mult(&m))
    }

    /// `self = self * m`
    ///
    /// In column-major convention the product applies `m` first, then the
    /// original `self`.
    pub fn mult(&mut self, m: &Matrix3) -> &mut Self {
        let mut temp = Self::ZERO;

        for col in 0..3 {
            for row in 0..3 {
                let value = (0..3).map(|k| self.get(k, row) * m.get(col, k)).sum::<f32>();
                temp.put(col, row, value);
            }
        }

        *self = temp;
        self
    }

    /// Transform a vector: `result = M * v`
    pub fn mult3(&self, v: Vector3) -> Vector3 {
        let m = &self.matrix;
        Vector3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }

    /// Transpose in place
    pub fn transpose(&mut self) -> &mut Self {
        self.matrix.swap(1, 3);
        self.matrix.swap(2, 6);
        self.matrix.swap(5, 7);
        self
    }

    /// Determinant by the rule of Sarrus
    pub fn determinant(&self) -> f32 {
        let m = &self.matrix;
        m[0] * m[4] * m[8] + m[3] * m[7] * m[2] + m[6] * m[1] * m[5]
            - m[2] * m[4] * m[6]
            - m[5] * m[7] * m[0]
            - m[8] * m[1] * m[3]
    }

    /// Invert in place: `adjugate / determinant`
    ///
    /// A zero determinant, or one so small that the inverse is not
    /// representable, is reported as [`MathError::SingularMatrix`] and the
    /// matrix is left untouched.
    pub fn inverse(&mut self) -> Result<&mut Self, MathError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(MathError::SingularMatrix);
        }

        let m = &self.matrix;
        // Cofactor matrix, column-major
        let mut inv = Self::from_cols_array([
            m[4] * m[8] - m[5] * m[7],
            -(m[3] * m[8] - m[5] * m[6]),
            m[3] * m[7] - m[4] * m[6],
            -(m[1] * m[8] - m[2] * m[7]),
            m[0] * m[8] - m[2] * m[6],
            -(m[0] * m[7] - m[1] * m[6]),
            m[1] * m[5] - m[2] * m[4],
            -(m[0] * m[5] - m[2] * m[3]),
            m[0] * m[4] - m[1] * m[3],
        ]);
        inv.transpose();
        // Divide rather than scale by 1 / det, which overflows for subnormal det
        for c in inv.matrix.iter_mut() {
            *c /= det;
        }
        if inv.matrix.iter().any(|c| !c.is_finite()) {
            return Err(MathError::SingularMatrix);
        }

        *self = inv;
        Ok(self)
    }

    /// Normal matrix for a model transform: the inverse-transpose of its
    /// upper-left 3x3 block
    pub fn normal_matrix(model: &Matrix4) -> Result<Self, MathError> {
        let mut m = Self::ZERO;
        m.set4x4(model).inverse()?.transpose();
        Ok(m)
    }

    /// Coefficients as a flat column-major buffer
    #[inline]
    pub fn as_array(&self) -> &[f32; 9] {
        &self.matrix
    }

    /// Coefficients as raw bytes, ready for upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        let mut result = self;
        result.mult(&other);
        result
    }
}

impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        self.mult3(v)
    }
}
