//! Tutorial scenes
//!
//! A scene follows the init → (update → display)* lifecycle of a single-window
//! OpenGL tutorial. Window creation, shader compilation and draw calls belong
//! to the graphics layer; a scene only produces the data that layer uploads,
//! handed over through a [`UniformSink`].

mod hello_triangle;
mod sink;
mod spinning_triangle;

pub use hello_triangle::HelloTriangle;
pub use sink::{RecordingSink, Upload, UniformSink};
pub use spinning_triangle::SpinningTriangle;

use gltut_math::MathError;
use std::fmt;

use crate::config::{AppConfig, SceneKind};

/// A tutorial scene
pub trait Scene {
    /// Human-readable scene name
    fn name(&self) -> &str;

    /// Upload data that stays constant for the lifetime of the scene
    fn init(&mut self, sink: &mut dyn UniformSink) -> Result<(), SceneError>;

    /// Advance the scene by `dt` seconds
    fn update(&mut self, dt: f32) -> Result<(), SceneError>;

    /// Upload per-frame data
    fn display(&mut self, sink: &mut dyn UniformSink) -> Result<(), SceneError>;
}

/// Build the scene selected by the configuration
pub fn build_scene(config: &AppConfig) -> Result<Box<dyn Scene>, SceneError> {
    match config.scene.kind {
        SceneKind::HelloTriangle => Ok(Box::new(HelloTriangle::new())),
        SceneKind::SpinningTriangle => Ok(Box::new(SpinningTriangle::from_config(config)?)),
    }
}

/// Error raised while building or running a scene
#[derive(Debug)]
pub enum SceneError {
    /// A math operation failed (singular transform, zero-length axis, ...)
    Math(MathError),
    /// A configuration value cannot be used by the scene
    InvalidConfig(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Math(err) => write!(f, "Scene math error: {}", err),
            SceneError::InvalidConfig(msg) => write!(f, "Invalid scene configuration: {}", msg),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Math(err) => Some(err),
            SceneError::InvalidConfig(_) => None,
        }
    }
}

impl From<MathError> for SceneError {
    fn from(err: MathError) -> Self {
        SceneError::Math(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_build_selected_scene() {
        let mut config = AppConfig::default();
        config.scene.kind = SceneKind::HelloTriangle;
        assert_eq!(build_scene(&config).unwrap().name(), "Hello Triangle");

        config.scene.kind = SceneKind::SpinningTriangle;
        assert_eq!(build_scene(&config).unwrap().name(), "Spinning Triangle");
    }

    #[test]
    fn test_build_rejects_zero_axis() {
        let mut config = AppConfig::default();
        config.rotation.axis = [0.0, 0.0, 0.0];
        let err = build_scene(&config).err().unwrap();
        assert!(matches!(err, SceneError::Math(MathError::ZeroLength)));
    }

    #[test]
    fn test_error_display_and_source() {
        let err: SceneError = MathError::SingularMatrix.into();
        assert!(format!("{}", err).contains("singular"));
        assert!(err.source().is_some());

        let err = SceneError::InvalidConfig("near plane".to_string());
        assert!(format!("{}", err).contains("near plane"));
        assert!(err.source().is_none());
    }
}
