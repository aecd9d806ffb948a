//! Per-frame observation types handed over by a landmark source.
//!
//! Coordinates are normalized to the frame, with `x` running left to right
//! and `y` top to bottom, both nominally in `[0, 1]`. Pose estimators may
//! report points slightly outside that range when the subject is partially
//! out of frame; those values are passed through untouched.

use crate::{constants::CENTER_DIVISOR, Error, Result};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    width: u32,
    height: u32,
}

impl FrameGeometry {
    /// Create frame geometry from pixel dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidInput(format!(
                "Frame dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Frame width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Column of the optical center.
    ///
    /// Integer division: odd widths place the center half a pixel left of
    /// the true middle.
    #[must_use]
    pub const fn center_x(&self) -> i64 {
        (self.width / CENTER_DIVISOR) as i64
    }
}

/// A single normalized body landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0.0 at the left edge
    pub x: f64,
    /// Vertical position, 0.0 at the top edge
    #[serde(default)]
    pub y: f64,
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The tracked person as seen in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub left_hip: Landmark,
    pub right_hip: Landmark,
}

impl Subject {
    #[must_use]
    pub const fn new(left_hip: Landmark, right_hip: Landmark) -> Self {
        Self { left_hip, right_hip }
    }

    /// Build a subject from the horizontal hip positions only
    #[must_use]
    pub const fn from_hips_x(left_hip_x: f64, right_hip_x: f64) -> Self {
        Self {
            left_hip: Landmark::new(left_hip_x, 0.0),
            right_hip: Landmark::new(right_hip_x, 0.0),
        }
    }

    /// Check that every coordinate is a finite number
    ///
    /// # Errors
    ///
    /// Returns an error naming the first non-finite landmark
    pub fn validate(&self) -> Result<()> {
        if !self.left_hip.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Left hip landmark is not finite: {:?}",
                self.left_hip
            )));
        }
        if !self.right_hip.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Right hip landmark is not finite: {:?}",
                self.right_hip
            )));
        }
        Ok(())
    }
}

/// Everything a landmark source reports for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameObservation {
    pub geometry: FrameGeometry,
    /// `None` when nobody was detected
    pub subject: Option<Subject>,
}

impl FrameObservation {
    #[must_use]
    pub const fn detected(geometry: FrameGeometry, subject: Subject) -> Self {
        Self {
            geometry,
            subject: Some(subject),
        }
    }

    #[must_use]
    pub const fn missed(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            subject: None,
        }
    }
}
