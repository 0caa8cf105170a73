//! Uniform upload boundary
//!
//! [`UniformSink`] is the only interface between the scenes and the graphics
//! layer. Buffers are passed as borrowed flat `f32` slices in the layout
//! OpenGL expects; the sink copies whatever it needs before returning.

use std::collections::HashMap;

/// Consumer of flat buffers (a GL program, a recorder, ...)
pub trait UniformSink {
    /// Upload a column-major `mat4` uniform
    fn upload_matrix4(&mut self, name: &str, data: &[f32; 16]);

    /// Upload a column-major `mat3` uniform
    fn upload_matrix3(&mut self, name: &str, data: &[f32; 9]);

    /// Upload a `vec4` uniform
    fn upload_vector4(&mut self, name: &str, data: &[f32; 4]);

    /// Upload a vertex attribute buffer
    fn upload_vertices(&mut self, name: &str, data: &[f32]);
}

/// A recorded upload
#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Matrix4([f32; 16]),
    Matrix3([f32; 9]),
    Vector4([f32; 4]),
    Vertices(Vec<f32>),
}

impl Upload {
    /// The uploaded values, flat
    pub fn values(&self) -> &[f32] {
        match self {
            Upload::Matrix4(m) => &m[..],
            Upload::Matrix3(m) => &m[..],
            Upload::Vector4(v) => &v[..],
            Upload::Vertices(v) => v.as_slice(),
        }
    }
}

/// Sink that keeps the latest upload for every name
#[derive(Debug, Default)]
pub struct RecordingSink {
    uploads: HashMap<String, Upload>,
    count: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest upload under `name`
    pub fn get(&self, name: &str) -> Option<&Upload> {
        self.uploads.get(name)
    }

    /// Total number of uploads received, including overwritten ones
    pub fn upload_count(&self) -> usize {
        self.count
    }

    /// Latest uploads, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Upload)> {
        let mut entries: Vec<_> = self.uploads.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    fn record(&mut self, name: &str, upload: Upload) {
        self.count += 1;
        self.uploads.insert(name.to_string(), upload);
    }
}

impl UniformSink for RecordingSink {
    fn upload_matrix4(&mut self, name: &str, data: &[f32; 16]) {
        self.record(name, Upload::Matrix4(*data));
    }

    fn upload_matrix3(&mut self, name: &str, data: &[f32; 9]) {
        self.record(name, Upload::Matrix3(*data));
    }

    fn upload_vector4(&mut self, name: &str, data: &[f32; 4]) {
        self.record(name, Upload::Vector4(*data));
    }

    fn upload_vertices(&mut self, name: &str, data: &[f32]) {
        self.record(name, Upload::Vertices(data.to_vec()));
    }
}
