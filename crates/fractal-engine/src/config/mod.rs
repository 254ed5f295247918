//! Viewer configuration with TOML file support.
//!
//! Every section uses `#[serde(default)]`, so a file only needs the keys it
//! overrides:
//!
//! ```toml
//! [camera]
//! position = [0.0, 0.0, 2.0]
//!
//! [params]
//! power = 8.0
//! ```

mod error;

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use winit::dpi::LogicalSize;

use crate::camera::{self, Camera};
use crate::device::GpuInit;
use crate::logging::LoggingConfig;
use crate::uniforms::FractalParams;
use crate::window::RuntimeConfig;

pub use error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub logging: LoggingSection,
    pub params: FractalParams,
}

impl ViewerConfig {
    /// Reads a configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the configuration as pretty-printed TOML, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)
    }
}

/// `[window]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels.
    pub width: f64,
    pub height: f64,
    /// FIFO presentation when true; lowest-latency mode otherwise.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mandelbulb".to_string(),
            width: 1000.0,
            height: 1000.0,
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }

    pub fn gpu_init(&self) -> GpuInit {
        GpuInit {
            vsync: self.vsync,
            ..GpuInit::default()
        }
    }
}

/// `[camera]`: initial camera state and projection planes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: camera::DEFAULT_YAW,
            pitch: camera::DEFAULT_PITCH,
            movement_speed: camera::DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: camera::DEFAULT_MOUSE_SENSITIVITY,
            zoom: camera::DEFAULT_ZOOM,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl CameraConfig {
    /// Builds the starting camera described by this section.
    pub fn build(&self) -> Camera {
        let mut c = Camera::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.world_up),
            self.yaw,
            self.pitch,
        );
        c.movement_speed = self.movement_speed;
        c.mouse_sensitivity = self.mouse_sensitivity;
        c.set_zoom(self.zoom);
        c
    }
}

/// `[controls]`: input scaling and idle animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Applied to raw cursor deltas before camera sensitivity.
    pub cursor_scale: f32,
    /// Applied to frame delta time before keyboard movement.
    pub time_scale: f32,
    /// Degrees added to the scene spin every frame. Zero disables the spin.
    pub auto_rotate_speed: f32,
    /// Converts pixel-precise wheel deltas into scroll lines.
    pub scroll_pixels_per_line: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            cursor_scale: 0.1,
            time_scale: 0.1,
            auto_rotate_speed: 0.1,
            scroll_pixels_per_line: 20.0,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `env_logger` filter string; `RUST_LOG` is used when absent.
    pub filter: Option<String>,
}

impl LoggingSection {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.filter.clone(),
            ..LoggingConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = ViewerConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed = ViewerConfig::from_toml_str(&text).unwrap();
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ViewerConfig::from_toml_str("").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn partial_sections_override_only_named_keys() {
        let cfg = ViewerConfig::from_toml_str(
            r#"
            [camera]
            yaw = 0.0
            zoom = 200.0

            [params]
            power = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.camera.yaw, 0.0);
        assert_eq!(cfg.camera.position, [0.0, 0.0, 3.0]);
        assert_eq!(cfg.params.power, 8.0);
        assert_eq!(cfg.params.fractal_iters, 100);
        assert_eq!(cfg.window, WindowConfig::default());

        // Out-of-range zoom is clamped when the camera is built.
        assert_eq!(cfg.camera.build().zoom(), camera::ZOOM_MAX);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = ViewerConfig::from_toml_str("[camera\nyaw = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ViewerConfig::load(Path::new("/nonexistent/fractal-viewer.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("fractal-viewer-{}", std::process::id()));
        let path = dir.join("nested").join("viewer.toml");

        let mut cfg = ViewerConfig::default();
        cfg.params.julia = true;
        cfg.controls.auto_rotate_speed = 0.0;
        cfg.save(&path).unwrap();

        assert_eq!(ViewerConfig::load(&path).unwrap(), cfg);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn camera_section_builds_camera() {
        let cfg = CameraConfig {
            movement_speed: 5.0,
            mouse_sensitivity: 0.2,
            zoom: 30.0,
            ..CameraConfig::default()
        };
        let c = cfg.build();
        assert_eq!(c.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(c.movement_speed, 5.0);
        assert_eq!(c.mouse_sensitivity, 0.2);
        assert_eq!(c.zoom(), 30.0);
    }

    #[test]
    fn vsync_flows_into_gpu_init() {
        let mut w = WindowConfig::default();
        assert!(w.gpu_init().vsync);
        w.vsync = false;
        let init = w.gpu_init();
        assert!(!init.vsync);
        assert!(!init.prefer_srgb);
    }
}
