//! Headless scene loop
//!
//! Drives a scene through its lifecycle at a fixed time step:
//! - `init` once
//! - `update` + `display` per frame

use crate::config::SceneConfig;
use crate::scene::{Scene, SceneError, UniformSink};

/// Runs a scene for a fixed number of frames
#[derive(Debug, Clone, Copy)]
pub struct SceneRunner {
    frames: u32,
    time_step: f32,
}

impl SceneRunner {
    /// Create a runner
    pub fn new(frames: u32, time_step: f32) -> Self {
        Self { frames, time_step }
    }

    /// Create a runner from the scene section of the configuration
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.frames, config.time_step)
    }

    /// Run `scene`, sending every upload to `sink`
    ///
    /// Stops at the first error. Returns the number of frames displayed.
    pub fn run(&self, scene: &mut dyn Scene, sink: &mut dyn UniformSink) -> Result<u32, SceneError> {
        log::info!(
            "Running '{}' for {} frames (dt = {:.4}s)",
            scene.name(),
            self.frames,
            self.time_step
        );

        scene.init(sink)?;

        for frame in 0..self.frames {
            scene.update(self.time_step)?;
            scene.display(sink)?;
            log::debug!("Frame {} displayed", frame);
        }

        log::info!("'{}' finished after {} frames", scene.name(), self.frames);
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::scene::{build_scene, HelloTriangle, RecordingSink, SpinningTriangle};
    use gltut_math::{Matrix4, Quaternion, Vector3, Vector4};

    /// Scene that fails on a chosen frame
    struct Failing {
        fail_at: u32,
        frame: u32,
    }

    impl Scene for Failing {
        fn name(&self) -> &str {
            "Failing"
        }

        fn init(&mut self, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
            Ok(())
        }

        fn update(&mut self, _dt: f32) -> Result<(), SceneError> {
            self.frame += 1;
            Ok(())
        }

        fn display(&mut self, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
            if self.frame == self.fail_at {
                // Degenerate model transform
                let mut model = Matrix4::ZERO;
                model.inverse()?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_runs_configured_frames() {
        let mut scene = HelloTriangle::new();
        let mut sink = RecordingSink::new();
        let frames = SceneRunner::new(5, 0.1).run(&mut scene, &mut sink).unwrap();
        assert_eq!(frames, 5);
        assert_eq!(scene.frames_drawn(), 5);
        // Only the vertex buffer
        assert_eq!(sink.upload_count(), 1);
    }

    #[test]
    fn test_spinning_scene_full_turn() {
        let mut scene =
            SpinningTriangle::new(Vector3::Y, 90.0, 2.0, Matrix4::IDENTITY, Vector4::W).unwrap();
        let mut sink = RecordingSink::new();
        SceneRunner::new(40, 0.1).run(&mut scene, &mut sink).unwrap();

        // 4 seconds at 90 deg/s is a full turn: back to identity up to sign
        let q = scene.orientation();
        assert!((q.dot(&Quaternion::IDENTITY).abs() - 1.0).abs() < 0.001, "got {}", q);
        // vertices + projection once, then three uploads per frame
        assert_eq!(sink.upload_count(), 2 + 40 * 3);
    }

    #[test]
    fn test_stops_at_first_error() {
        let mut scene = Failing { fail_at: 3, frame: 0 };
        let mut sink = RecordingSink::new();
        let result = SceneRunner::new(10, 0.1).run(&mut scene, &mut sink);
        assert!(matches!(result, Err(SceneError::Math(_))));
        assert_eq!(scene.frame, 3);
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::default();
        let mut scene = build_scene(&config).unwrap();
        let mut sink = RecordingSink::new();
        let frames = SceneRunner::from_config(&config.scene)
            .run(scene.as_mut(), &mut sink)
            .unwrap();
        assert_eq!(frames, config.scene.frames);
        assert!(sink.get("modelToCameraMatrix").is_some());
    }
}
