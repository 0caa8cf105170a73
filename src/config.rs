//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GLTUT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Which scene to run and for how long
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rotation applied by animated scenes
    #[serde(default)]
    pub rotation: RotationConfig,
    /// Camera / projection configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GLTUT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GLTUT_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("GLTUT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
///
/// The window itself is owned by the graphics layer; these values only feed
/// the projection aspect ratio and the startup log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Requested OpenGL major version
    pub gl_major: u32,
    /// Requested OpenGL minor version
    pub gl_minor: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "gltut - OpenGL tutorials".to_string(),
            width: 800,
            height: 600,
            gl_major: 3,
            gl_minor: 3,
            vsync: true,
        }
    }
}

/// The tutorial scenes that can be run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// A static triangle, no uniforms
    HelloTriangle,
    /// A triangle rotating in front of a perspective camera
    SpinningTriangle,
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Scene to run
    pub kind: SceneKind,
    /// Number of frames to simulate
    pub frames: u32,
    /// Seconds advanced per frame
    pub time_step: f32,
    /// Object color [r, g, b, a]
    pub color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            kind: SceneKind::SpinningTriangle,
            frames: 60,
            time_step: 1.0 / 60.0,
            color: [1.0, 0.5, 0.2, 1.0],
        }
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Rotation axis [x, y, z] (normalized on use, must not be zero)
    pub axis: [f32; 3],
    /// Angular speed in degrees per second
    pub degrees_per_second: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            axis: [0.0, 1.0, 0.0],
            degrees_per_second: 90.0,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance from the camera to the scene origin along -Z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 3.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
