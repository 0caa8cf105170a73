//! Hello Triangle
//!
//! The first tutorial: three clip-space vertices, no transforms.

use gltut_math::Vector4;

use super::{Scene, SceneError, UniformSink};

/// Vertex positions in clip space, uploaded once
pub const VERTEX_POSITIONS: [Vector4; 3] = [
    Vector4::new(0.75, 0.75, 0.0, 1.0),
    Vector4::new(0.75, -0.75, 0.0, 1.0),
    Vector4::new(-0.75, -0.75, 0.0, 1.0),
];

/// A static triangle
#[derive(Debug, Default)]
pub struct HelloTriangle {
    frames_drawn: u32,
}

impl HelloTriangle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `display` calls so far
    pub fn frames_drawn(&self) -> u32 {
        self.frames_drawn
    }
}

impl Scene for HelloTriangle {
    fn name(&self) -> &str {
        "Hello Triangle"
    }

    fn init(&mut self, sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        sink.upload_vertices("position", bytemuck::cast_slice(&VERTEX_POSITIONS));
        Ok(())
    }

    fn update(&mut self, _dt: f32) -> Result<(), SceneError> {
        Ok(())
    }

    fn display(&mut self, _sink: &mut dyn UniformSink) -> Result<(), SceneError> {
        // Nothing changes between frames; the vertex buffer is already bound
        self.frames_drawn += 1;
        Ok(())
    }
}
