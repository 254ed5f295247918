//! Interactive Mandelbulb viewer.
//!
//! Usage: `fractal-viewer [config.toml]`. Without an argument the path is taken
//! from `FRACTAL_VIEWER_CONFIG`; without either, defaults are used.
//!
//! Controls: WASD / arrows move, mouse looks, wheel zooms, `P` pauses the
//! spin, `R` resets the camera, `Escape` quits.

mod app;

use std::path::PathBuf;

use anyhow::{Context, Result};

use fractal_engine::config::ViewerConfig;
use fractal_engine::logging::init_logging;
use fractal_engine::window::Runtime;

use app::FractalApp;

const CONFIG_ENV: &str = "FRACTAL_VIEWER_CONFIG";

fn main() -> Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let config = match &config_path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    init_logging(config.logging.logging_config());
    match &config_path {
        Some(path) => log::info!("loaded config from {}", path.display()),
        None => log::info!("no config file given; using defaults"),
    }

    let app = FractalApp::new(&config);
    Runtime::run(config.window.runtime_config(), config.window.gpu_init(), app)
}
