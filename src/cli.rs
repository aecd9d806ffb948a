//! Command line interface definition.

use crate::{config::Config, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Point a rotor at the person in a recorded landmark trace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Landmark trace to replay (YAML)
    #[arg(required_unless_present = "print_config")]
    pub trace: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Number of frames to average before deciding to move
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Deadband in degrees; smaller bearing changes never move the rotor
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Camera horizontal field of view in degrees
    #[arg(long)]
    pub hfov: Option<f64>,

    /// Replay pacing in frames per second (0 for unthrottled)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Build the effective configuration: the file given with `-C` (or the
    /// defaults), then command line overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// or if the resulting configuration is invalid
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                Config::from_file(path)?
            }
            None => Config::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite configuration values given on the command line
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(window) = self.window {
            config.tracking.smoothing_window = window;
        }
        if let Some(threshold) = self.threshold {
            config.tracking.movement_threshold = threshold;
        }
        if let Some(hfov) = self.hfov {
            config.tracking.horizontal_fov = hfov;
        }
        if let Some(fps) = self.fps {
            config.camera.replay_fps = fps;
        }
    }
}
