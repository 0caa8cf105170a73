//! Spinning Triangle
//!
//! The hello-triangle geometry placed in front of a perspective camera and
//! rotated about a configurable axis. Exercises the full transform chain:
//! quaternion orientation → model matrix → normal matrix → clip space.

use gltut_math::{Matrix3, Matrix4, Quaternion, Vector3, Vector4};

use super::hello_triangle::VERTEX_POSITIONS;
use super::{Scene, SceneError, UniformSink};
use crate::config::AppConfig;

/// A triangle rotating at constant angular speed
#[derive(Debug, Clone)]
pub struct SpinningTriangle {
    /// Current orientation (unit length)
    orientation: Quaternion,
    /// Unit rotation axis
    axis: Vector3,
    radians_per_second: f32,
    /// Offset from the camera along -Z
    distance: f32,
    camera_to_clip: Matrix4,
    color: Vector4,
}

impl SpinningTriangle {
    /// Create the scene
    ///
    /// `axis` is normalized here; a zero axis is rejected.
    pub fn new(
        axis: Vector3,
        degrees_per_second: f32,
        distance: f32,
        camera_to_clip: Matrix4,
        color: Vector4,
    ) -> Result<Self, SceneError> {
        Ok(Self {
            orientation: Quaternion::IDENTITY,
            axis: axis.normalized()?,
            radians_per_second: degrees_per_second.to_radians(),
            distance,
            camera_to_clip,
            color,
        })
    }

    /// Create the scene from the rotation, camera and window sections
    pub fn from_config(config: &AppConfig) -> Result<Self, SceneError> {
        let camera = &config.camera;
        if camera.near <= 0.0 || camera.far <= camera.near {
            return Err(SceneError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far (near = {}, far = {})",
                camera.near, camera.far
            )));
        }
        let fov_in_range = camera.fov > 0.0 && camera.fov < 180.0;
        if !fov_in_range {
            return Err(SceneError::InvalidConfig(format!(
                "field of view must be within (0, 180) degrees, got {}",
                camera.fov
            )));
        }
        let distance_positive = camera.distance > 0.0 && camera.distance.is_finite();
        if !distance_positive {
            return Err(SceneError::InvalidConfig(format!(
                "camera distance must be positive, got {}",
                camera.distance
            )));
        }
        if config.window.width == 0 || config.window.height == 0 {
            return Err(SceneError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                config.window.width, config.window.height
            )));
        }

        let mut camera_to_clip = Matrix4::new();
        camera_to_clip.clear_to_perspective(
            camera.fov.to_radians(),
            config.window.width as f32,
            config.window.height as f32,
            camera.near,
            camera.far,
        );

        Self::new(
            Vector3::from(config.rotation.axis),
            config.rotation.degrees_per_second,
            camera.distance,
            camera_to_clip,
            Vector4::from(config.scene.color),
        )
    }

    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Model-to-camera transform: rotate, then push away from the camera
    pub fn model_to_camera(&self) -> Matrix4 {
        let mut model = Matrix4::IDENTITY;
        model
            .translate(Vector3::new(0.0, 0.0, -self.distance))
            .mult(&self.orientation.to_matrix());
        model
    }
}

impl Scene for SpinningTriangle {
    fn name(&self) -> &str {
        "Spinning Triangle"
    }

    fn init(&mut self, sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        sink.upload_vertices("position", bytemuck::cast_slice(&VERTEX_POSITIONS));
        sink.upload_matrix4("cameraToClipMatrix", self.camera_to_clip.as_array());
        Ok(())
    }

    fn update(&mut self, dt: f32) -> Result<(), SceneError> {
        let mut next = Quaternion::from_axis_angle(self.axis, self.radians_per_second * dt);
        // Applied after the current orientation; renormalize to stop drift
        next.mult(&self.orientation).normalize()?;
        self.orientation = next;
        Ok(())
    }

    fn display(&mut self, sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        let model = self.model_to_camera();
        let normal = Matrix3::normal_matrix(&model)?;

        sink.upload_matrix4("modelToCameraMatrix", model.as_array());
        sink.upload_matrix3("normalMatrix", normal.as_array());
        sink.upload_vector4("color", self.color.as_array());
        Ok(())
    }
}
