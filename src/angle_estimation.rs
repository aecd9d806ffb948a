//! Bearing estimation from body landmarks.
//!
//! The subject's horizontal position is taken as the midpoint of the two hip
//! landmarks, measured in pixels, and mapped linearly onto the camera's
//! horizontal field of view.
//!
//! # Known limitation
//!
//! The pixel-to-angle mapping assumes an ideal rectilinear lens where every
//! pixel column spans the same angle. Real lenses, wide-angle webcams in
//! particular, compress the edges of the frame, so bearings near the border
//! are underestimated. No distortion correction is applied.

use crate::{
    landmarks::{FrameGeometry, Subject},
    utils::safe_cast::{f64_round_to_i64_saturating, i64_to_f64},
};

/// Converts subject landmarks into a signed bearing angle in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEstimator {
    horizontal_fov: f64,
}

impl AngleEstimator {
    /// Create an estimator for a camera with the given horizontal field of view
    #[must_use]
    pub fn new(horizontal_fov: f64) -> Self {
        assert!(
            horizontal_fov.is_finite() && horizontal_fov > 0.0,
            "Horizontal field of view must be positive"
        );
        Self { horizontal_fov }
    }

    /// Horizontal field of view in degrees
    #[must_use]
    pub const fn horizontal_fov(&self) -> f64 {
        self.horizontal_fov
    }

    /// Pixel column of the subject's hip midpoint.
    ///
    /// Both hips are scaled to pixels before averaging.
    #[must_use]
    pub fn person_center_x(subject: &Subject, geometry: FrameGeometry) -> i64 {
        let width = f64::from(geometry.width());
        let left = subject.left_hip.x * width;
        let right = subject.right_hip.x * width;
        f64_round_to_i64_saturating((left + right) / 2.0)
    }

    /// Estimate the bearing of `subject`.
    ///
    /// Positive angles are right of the optical center, negative angles left.
    #[must_use]
    pub fn estimate(&self, subject: &Subject, geometry: FrameGeometry) -> f64 {
        let person_center_x = Self::person_center_x(subject, geometry);
        self.angle_for_column(person_center_x, geometry)
    }

    /// Bearing of an arbitrary pixel column
    #[must_use]
    pub fn angle_for_column(&self, column: i64, geometry: FrameGeometry) -> f64 {
        let pixel_offset = column.saturating_sub(geometry.center_x());
        (i64_to_f64(pixel_offset) / f64::from(geometry.width())) * self.horizontal_fov
    }
}
