//! Math error types
//!
//! Every fallible operation in this crate reports one of these instead of
//! letting a division by zero leak NaN or infinity into the results.

use std::fmt;

/// Error type for vector, matrix and quaternion operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Input slice is shorter than the fixed size of the target type
    InvalidLength {
        /// Number of values the target type needs
        expected: usize,
        /// Number of values that were provided
        actual: usize,
    },
    /// Matrix has a zero determinant and cannot be inverted
    SingularMatrix,
    /// Vector or quaternion has zero (or non-finite) length and cannot be
    /// normalized
    ZeroLength,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidLength { expected, actual } => write!(
                f,
                "float array must have at least {} values, got {}",
                expected, actual
            ),
            MathError::SingularMatrix => write!(f, "matrix is singular (determinant is zero)"),
            MathError::ZeroLength => write!(f, "cannot normalize a zero-length value"),
        }
    }
}

impl std::error::Error for MathError {}

/// Check that `values` holds at least `expected` floats
pub(crate) fn check_length(values: &[f32], expected: usize) -> Result<(), MathError> {
    if values.len() < expected {
        Err(MathError::InvalidLength {
            expected,
            actual: values.len(),
        })
    } else {
        Ok(())
    }
}

/// Components scaled to unit length
///
/// Divides by the largest magnitude before summing squares, so neither very
/// large nor very small components overflow or underflow the length.
pub(crate) fn unit_components<const N: usize>(
    components: [f32; N],
) -> Result<[f32; N], MathError> {
    if components.iter().any(|c| !c.is_finite()) {
        return Err(MathError::ZeroLength);
    }
    let largest = components.iter().fold(0.0f32, |m, c| m.max(c.abs()));
    if largest == 0.0 {
        return Err(MathError::ZeroLength);
    }

    let scaled = components.map(|c| c / largest);
    let length = scaled.iter().map(|c| c * c).sum::<f32>().sqrt();
    Ok(scaled.map(|c| c / length))
}
