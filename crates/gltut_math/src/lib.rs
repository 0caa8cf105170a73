//! 3D Mathematics Library
//!
//! Small fixed-size value types for the gltut tutorial scenes.
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - component vectors with in-place,
//!   chainable arithmetic
//! - [`Matrix3`], [`Matrix4`] - column-major square matrices
//! - [`Quaternion`] - 3D rotation
//!
//! Every type is `Copy`, `#[repr(C)]` and [`bytemuck::Pod`], and exposes its
//! coefficients through `as_array()` / `as_bytes()` in the order OpenGL expects
//! for uniform upload (declared component order for vectors and quaternions,
//! column-major for matrices). The returned slices borrow the value, so they
//! always reflect its state at the time of the call.
//!
//! Fallible operations (inverting a singular matrix, normalizing a zero-length
//! value, building from a short slice) return [`MathError`] instead of producing
//! NaN or infinity.
//!
//! None of the types synchronize internally; share them across threads the
//! way any other plain value is shared.

mod error;
mod vec2;
mod vec3;
mod vec4;
pub mod mat3;
pub mod mat4;
pub mod quaternion;

pub use error::MathError;
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;
pub use mat3::Matrix3;
pub use mat4::Matrix4;
pub use quaternion::Quaternion;
