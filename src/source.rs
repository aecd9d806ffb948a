//! Landmark sources feeding the tracker.
//!
//! Body detection happens outside this crate. A [`LandmarkSource`] hands over
//! one [`FrameObservation`] per captured frame. [`ReplaySource`] plays back a
//! recorded landmark trace so the pipeline can run without a camera.
//!
//! Trace files are YAML:
//!
//! ```yaml
//! width: 640
//! height: 480
//! frames:
//!   - left_hip: { x: 0.40, y: 0.55 }
//!     right_hip: { x: 0.50, y: 0.55 }
//!   - ~            # nobody detected
//! ```
//!
//! `width` and `height` may be omitted, in which case the configured camera
//! size is used.

use crate::{
    landmarks::{FrameGeometry, FrameObservation, Subject},
    Error, Result,
};
use log::info;
use serde::Deserialize;
use std::{path::Path, vec};

/// Supplier of per-frame landmark observations
pub trait LandmarkSource {
    /// Block until the next frame is available.
    ///
    /// Returns `Ok(None)` once the stream has ended.
    fn next_frame(&mut self) -> Result<Option<FrameObservation>>;
}

#[derive(Debug, Deserialize)]
struct TraceFile {
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    frames: Vec<Option<Subject>>,
}

/// Plays back a fixed sequence of observations
#[derive(Debug)]
pub struct ReplaySource {
    frames: vec::IntoIter<FrameObservation>,
}

impl ReplaySource {
    /// Replay observations held in memory
    #[must_use]
    pub fn new(frames: Vec<FrameObservation>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }

    /// Load a recorded trace from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid trace
    pub fn from_file<P: AsRef<Path>>(path: P, default_geometry: FrameGeometry) -> Result<Self> {
        info!("Loading landmark trace from {}", path.as_ref().display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, default_geometry)
    }

    /// Parse a recorded trace from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, the frame size is zero or
    /// a landmark coordinate is not a finite number
    pub fn from_yaml_str(content: &str, default_geometry: FrameGeometry) -> Result<Self> {
        let trace: TraceFile =
            serde_yaml::from_str(content).map_err(|e| Error::TraceError(format!("Failed to parse trace: {e}")))?;

        let geometry = FrameGeometry::new(
            trace.width.unwrap_or_else(|| default_geometry.width()),
            trace.height.unwrap_or_else(|| default_geometry.height()),
        )
        .map_err(|e| Error::TraceError(e.to_string()))?;

        let mut frames = Vec::with_capacity(trace.frames.len());
        for (index, subject) in trace.frames.into_iter().enumerate() {
            let observation = match subject {
                Some(subject) => {
                    subject
                        .validate()
                        .map_err(|e| Error::TraceError(format!("Frame {index}: {e}")))?;
                    FrameObservation::detected(geometry, subject)
                }
                None => FrameObservation::missed(geometry),
            };
            frames.push(observation);
        }

        info!(
            "Trace holds {} frames at {}x{}",
            frames.len(),
            geometry.width(),
            geometry.height()
        );
        Ok(Self::new(frames))
    }

    /// Frames not yet handed out
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LandmarkSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<FrameObservation>> {
        Ok(self.frames.next())
    }
}
