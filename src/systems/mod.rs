//! Application systems
//!
//! Loops that drive scenes outside of any windowing layer.

mod runner;

pub use runner::SceneRunner;
