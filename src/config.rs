//! Configuration management for the rotor tracker

use crate::{
    constants::{
        DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_HORIZONTAL_FOV, DEFAULT_MOVEMENT_THRESHOLD,
        DEFAULT_REPLAY_FPS, DEFAULT_SMOOTHING_WINDOW,
    },
    landmarks::FrameGeometry,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Bearing smoothing and deadband parameters
    pub tracking: TrackingConfig,

    /// Capture parameters
    pub camera: CameraConfig,
}

/// Parameters of the estimate, smooth and gate pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Number of frames averaged by the smoothing filter
    pub smoothing_window: usize,

    /// Minimum bearing change in degrees before the rotor moves
    pub movement_threshold: f64,

    /// Camera horizontal field of view in degrees
    pub horizontal_fov: f64,
}

/// Capture parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Replay pacing in frames per second, 0 to run unthrottled
    pub replay_fps: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            horizontal_fov: DEFAULT_HORIZONTAL_FOV,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            replay_fps: DEFAULT_REPLAY_FPS,
        }
    }
}

impl TrackingConfig {
    /// Validate tracking parameters
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range
    pub fn validate(&self) -> Result<()> {
        if self.smoothing_window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(Error::ConfigError(format!(
                "Movement threshold must be a non-negative number of degrees, got {}",
                self.movement_threshold
            )));
        }
        if !self.horizontal_fov.is_finite() || self.horizontal_fov <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Horizontal field of view must be positive, got {}",
                self.horizontal_fov
            )));
        }
        Ok(())
    }
}

impl CameraConfig {
    /// Frame geometry of the configured capture size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn geometry(&self) -> Result<FrameGeometry> {
        FrameGeometry::new(self.width, self.height)
            .map_err(|e| Error::ConfigError(format!("Invalid camera size: {e}")))
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Serialize configuration to YAML text
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.tracking.validate()?;
        self.camera.geometry()?;
        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Rotor Tracker Configuration

tracking:
  # Frames averaged before deciding to move (higher = smoother but slower)
  smoothing_window: 15
  # Deadband: minimum bearing change in degrees that moves the rotor
  movement_threshold: 3.0
  # Camera horizontal field of view in degrees
  horizontal_fov: 88.0

camera:
  width: 640
  height: 480
  # 0 replays recorded traces as fast as possible
  replay_fps: 0
"#;
