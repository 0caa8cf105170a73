//! gltut - OpenGL tutorial scenes
//!
//! Runs the configured tutorial scene headlessly and logs the buffers it would
//! hand to the graphics layer.

use std::process::ExitCode;

use gltut::config::AppConfig;
use gltut::scene::{build_scene, RecordingSink};
use gltut::systems::SceneRunner;

fn main() -> ExitCode {
    // Config first, so its log level can seed the logger
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!(
        "Starting gltut: '{}' {}x{}, OpenGL {}.{} core{}",
        config.window.title,
        config.window.width,
        config.window.height,
        config.window.gl_major,
        config.window.gl_minor,
        if config.window.vsync { ", vsync" } else { "" }
    );

    let mut scene = match build_scene(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut sink = RecordingSink::new();
    let runner = SceneRunner::from_config(&config.scene);
    if let Err(e) = runner.run(scene.as_mut(), &mut sink) {
        log::error!("Scene '{}' failed: {}", scene.name(), e);
        return ExitCode::FAILURE;
    }

    log::info!("{} uploads in total", sink.upload_count());
    for (name, upload) in sink.iter() {
        log::info!("{} = {:?}", name, upload.values());
    }

    ExitCode::SUCCESS
}
