//! 4x4 Matrix type
//!
//! Full homogeneous transforms: model, view and projection matrices.
//! Storage and multiplication follow the OpenGL column-major convention, so
//! [`Matrix4::as_array`] can be uploaded as a `mat4` uniform without
//! transposing.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{check_length, MathError};
use crate::{Matrix3, Quaternion, Vector3, Vector4};

/// 4x4 matrix stored as a flat column-major array (`index = col * 4 + row`)
///
/// The default value is the zero matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4 {
    matrix: [f32; 16],
}

impl Matrix4 {
    /// Number of coefficients
    pub const LENGTH: usize = 16;

    pub const ZERO: Self = Self { matrix: [0.0; 16] };

    pub const IDENTITY: Self = Self {
        matrix: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create a zero matrix
    #[inline]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Create a matrix from a column-major array
    #[inline]
    pub const fn from_cols_array(matrix: [f32; 16]) -> Self {
        Self { matrix }
    }

    /// Create a matrix from the first sixteen values of a column-major slice
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
        self.clear()
            .put_index(0, 1.0)
            .put_index(5, 1.0)
            .put_index(10, 1.0)
            .put_index(15, 1.0)
    }

    /// Reset to a perspective projection
    ///
    /// `fov` is the vertical field of view in radians. Maps the view frustum
    /// to OpenGL clip space (`z` in `[-1, 1]`, camera looking down `-z`).
    pub fn clear_to_perspective(
        &mut self,
        fov: f32,
        width: f32,
        height: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        let f = 1.0 / (fov * 0.5).tan();
        let aspect = width / height;

        self.clear()
            .put(0, 0, f / aspect)
            .put(1, 1, f)
            .put(2, 2, (far + near) / (near - far))
            .put(2, 3, -1.0)
            .put(3, 2, (2.0 * far * near) / (near - far))
    }

    /// Reset to an orthographic projection
    pub fn clear_to_ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.clear()
            .put(0, 0, 2.0 / (right - left))
            .put(1, 1, 2.0 / (top - bottom))
            .put(2, 2, -2.0 / (far - near))
            .put(3, 0, -(right + left) / (right - left))
            .put(3, 1, -(top + bottom) / (top - bottom))
            .put(3, 2, -(far + near) / (far - near))
            .put(3, 3, 1.0)
    }

    /// Coefficient at a raw column-major index
    #[inline]
    pub fn get_index(&self, index: usize) -> f32 {
        self.matrix[index]
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.matrix[col * 4 + row]
    }

    #[inline]
    pub fn put_index(&mut self, index: usize, value: f32) -> &mut Self {
        self.matrix[index] = value;
        self
    }

    #[inline]
    pub fn put(&mut self, col: usize, row: usize, value: f32) -> &mut Self {
        self.matrix[col * 4 + row] = value;
        self
    }

    pub fn put_column(&mut self, col: usize, v: Vector4) -> &mut Self {
        self.put(col, 0, v.x)
            .put(col, 1, v.y)
            .put(col, 2, v.z)
            .put(col, 3, v.w)
    }

    pub fn column(&self, col: usize) -> Vector4 {
        Vector4::new(
            self.get(col, 0),
            self.get(col, 1),
            self.get(col, 2),
            self.get(col, 3),
        )
    }

    /// Copy coefficients from a column-major slice of at least sixteen values
    ///
    /// A short slice leaves the matrix untouched.
    pub fn set(&mut self, values: &[f32]) -> Result<&mut Self, MathError> {
        check_length(values, Self::LENGTH)?;
        self.matrix.copy_from_slice(&values[..Self::LENGTH]);
        Ok(self)
    }

    /// Scale every coefficient
    pub fn mult_scalar(&mut self, f: f32) -> &mut Self {
        for value in self.matrix.iter_mut() {
            *value *= f;
        }
        self
    }

    /// `self = self * m`
    ///
    /// In column-major convention this applies `m` first, then the original
    /// `self`.
    #[allow(clippy::needless_range_loop)]
    pub fn mult(&mut self, m: &Matrix4) -> &mut Self {
        let mut temp = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                for k in 0..4 {
                    temp[col * 4 + row] += self.get(k, row) * m.get(col, k);
                }
            }
        }

        self.matrix = temp;
        self
    }

    /// Transform a Vector4: `result = M * v`
    pub fn mult4(&self, v: Vector4) -> Vector4 {
        let m = &self.matrix;
        Vector4::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        )
    }

    /// Transform a Vector3 extended with `w` (1 for points, 0 for directions)
    pub fn mult3(&self, v: Vector3, w: f32) -> Vector3 {
        self.mult4(Vector4::from_vec3(v, w)).xyz()
    }

    /// Transpose in place
    pub fn transpose(&mut self) -> &mut Self {
        for col in 0..4 {
            for row in (col + 1)..4 {
                self.matrix.swap(col * 4 + row, row * 4 + col);
            }
        }
        self
    }

    /// 3x3 determinant of the matrix with column `col` and row `row` removed
    fn minor(&self, col: usize, row: usize) -> f32 {
        let mut sub = Matrix3::ZERO;
        for (dst_col, src_col) in (0..4).filter(|&c| c != col).enumerate() {
            for (dst_row, src_row) in (0..4).filter(|&r| r != row).enumerate() {
                sub.put(dst_col, dst_row, self.get(src_col, src_row));
            }
        }
        sub.determinant()
    }

    fn cofactor(&self, col: usize, row: usize) -> f32 {
        let sign = if (col + row) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(col, row)
    }

    /// Determinant by cofactor expansion along the first column
    pub fn determinant(&self) -> f32 {
        (0..4).map(|row| self.get(0, row) * self.cofactor(0, row)).sum()
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

        let mut inv = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                // Adjugate is the transposed cofactor matrix
                inv.put(col, row, self.cofactor(row, col) / det);
            }
        }
        if inv.matrix.iter().any(|c| !c.is_finite()) {
            return Err(MathError::SingularMatrix);
        }

        *self = inv;
        Ok(self)
    }

    /// `self = self * translation(v)`
    pub fn translate(&mut self, v: Vector3) -> &mut Self {
        let mut t = Self::IDENTITY;
        t.put_column(3, Vector4::from_vec3(v, 1.0));
        self.mult(&t)
    }

    /// `self = self * scale(v)`
    pub fn scale(&mut self, v: Vector3) -> &mut Self {
        let mut s = Self::IDENTITY;
        s.put(0, 0, v.x).put(1, 1, v.y).put(2, 2, v.z);
        self.mult(&s)
    }

    /// `self = self * rotation(angle, axis)`
    ///
    /// The axis is normalized first; a zero axis is an error.
    pub fn rotate(&mut self, angle: f32, axis: Vector3) -> Result<&mut Self, MathError> {
        let rotation = Quaternion::from_axis_angle(axis.normalized()?, angle).to_matrix();
        Ok(self.mult(&rotation))
    }

    /// Coefficients as a flat column-major buffer
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// Coefficients grouped by column, the layout `bytemuck` uniform structs use
    #[inline]
    pub fn as_cols(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(&self.matrix)
    }

    /// Coefficients as raw bytes, ready for upload
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        let mut result = self;
        result.mult(&other);
        result
    }
}

impl std::ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        self.mult4(v)
    }
}
