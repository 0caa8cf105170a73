//! gltut - OpenGL tutorial scenes
//!
//! Library crate for the gltut binary. Exposes modules for integration testing.

pub mod config;
pub mod scene;
pub mod systems;
