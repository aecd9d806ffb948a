//! Per-frame tracking pipeline.
//!
//! A [`Tracker`] owns one session's estimator, smoothing filter and deadband
//! controller. Each detected frame runs estimate, smooth and evaluate as one
//! unit, in that order, so the smoothed bearing always reflects raw bearings
//! in frame arrival order and the deadband only ever sees filtered values.

use crate::{
    actuator::{ActuatorController, Decision},
    angle_estimation::AngleEstimator,
    config::TrackingConfig,
    filters::MovingAverageFilter,
    landmarks::FrameObservation,
};
use log::{debug, info, trace};

/// Everything computed for a frame with a detected subject
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Pixel column of the subject's hip midpoint
    pub person_center_x: i64,
    /// Bearing of this frame alone
    pub raw_angle: f64,
    /// Mean bearing over the smoothing window
    pub smoothed_angle: f64,
    /// Angle the rotor is locked at after this frame
    pub locked_angle: f64,
    pub decision: Decision,
}

/// Estimate, smooth and gate pipeline for one tracking session
#[derive(Debug, Clone)]
pub struct Tracker {
    estimator: AngleEstimator,
    filter: MovingAverageFilter,
    controller: ActuatorController,
}

impl Tracker {
    /// Build a tracker from validated tracking parameters
    ///
    /// # Panics
    ///
    /// Panics if the parameters have not passed [`TrackingConfig::validate`]
    #[must_use]
    pub fn new(config: &TrackingConfig) -> Self {
        Self {
            estimator: AngleEstimator::new(config.horizontal_fov),
            filter: MovingAverageFilter::new(config.smoothing_window),
            controller: ActuatorController::new(config.movement_threshold),
        }
    }

    /// Process one frame.
    ///
    /// Returns `None` when no subject was detected; such frames leave the
    /// smoothing history and the locked angle untouched, so the rotor holds
    /// its last position.
    pub fn process_frame(&mut self, observation: &FrameObservation) -> Option<FrameReport> {
        let Some(subject) = observation.subject.as_ref() else {
            debug!("No subject detected, holding at {:.1} deg", self.controller.current_angle());
            return None;
        };

        let person_center_x = AngleEstimator::person_center_x(subject, observation.geometry);
        let raw_angle = self.estimator.angle_for_column(person_center_x, observation.geometry);
        let smoothed_angle = self.filter.push(raw_angle);
        let decision = self.controller.evaluate(smoothed_angle);

        if decision.is_rotating() {
            info!(
                "Rotating to {:.1} deg (raw {:.1} deg, subject at x={})",
                smoothed_angle, raw_angle, person_center_x
            );
        } else {
            trace!(
                "Holding at {:.1} deg, target {:.1} deg",
                self.controller.current_angle(),
                smoothed_angle
            );
        }

        Some(FrameReport {
            person_center_x,
            raw_angle,
            smoothed_angle,
            locked_angle: self.controller.current_angle(),
            decision,
        })
    }

    /// Clear smoothing history and return the rotor to neutral
    pub fn reset(&mut self) {
        info!("Resetting tracking session");
        self.filter.reset();
        self.controller.reset();
    }

    #[must_use]
    pub const fn estimator(&self) -> &AngleEstimator {
        &self.estimator
    }

    #[must_use]
    pub const fn filter(&self) -> &MovingAverageFilter {
        &self.filter
    }

    #[must_use]
    pub const fn controller(&self) -> &ActuatorController {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actuator::MotionState,
        landmarks::{FrameGeometry, Subject},
    };

    fn geometry() -> FrameGeometry {
        FrameGeometry::new(640, 480).unwrap()
    }

    #[test]
    fn test_first_detection_rotates() {
        let mut tracker = Tracker::new(&TrackingConfig::default());

        let report = tracker
            .process_frame(&FrameObservation::detected(geometry(), Subject::from_hips_x(0.40, 0.50)))
            .unwrap();

        assert_eq!(report.person_center_x, 288);
        assert!((report.raw_angle - -4.4).abs() < 1e-9);
        assert_eq!(report.smoothed_angle, report.raw_angle);
        assert_eq!(report.decision.state, MotionState::Rotating);
        assert_eq!(report.decision.commanded_angle, Some(report.smoothed_angle));
        assert_eq!(report.locked_angle, report.smoothed_angle);
    }

    #[test]
    fn test_missed_frame_changes_nothing() {
        let mut tracker = Tracker::new(&TrackingConfig::default());
        tracker.process_frame(&FrameObservation::detected(geometry(), Subject::from_hips_x(0.8, 0.9)));
        let history_before: Vec<f64> = tracker.filter().history().collect();
        let state_before = *tracker.controller().state();

        for _ in 0..20 {
            assert!(tracker.process_frame(&FrameObservation::missed(geometry())).is_none());
        }

        assert_eq!(tracker.filter().history().collect::<Vec<_>>(), history_before);
        assert_eq!(*tracker.controller().state(), state_before);
    }

    fn centered() -> FrameObservation {
        FrameObservation::detected(geometry(), Subject::from_hips_x(0.5, 0.5))
    }

    fn far_right() -> FrameObservation {
        FrameObservation::detected(geometry(), Subject::from_hips_x(0.9, 0.9))
    }

    #[test]
    fn test_single_outlier_is_gated_on_smoothed_angle() {
        let mut tracker = Tracker::new(&TrackingConfig::default());
        for _ in 0..15 {
            let report = tracker.process_frame(&centered()).unwrap();
            assert_eq!(report.decision.state, MotionState::Holding);
        }

        // Raw bearing jumps to 35.2 but the window of 15 only moves to ~2.35
        let report = tracker.process_frame(&far_right()).unwrap();
        assert!((report.raw_angle - 35.2).abs() < 1e-9);
        assert!((report.smoothed_angle - 35.2 / 15.0).abs() < 1e-9);
        assert_eq!(report.decision.state, MotionState::Holding);
        assert_eq!(report.decision.commanded_angle, None);
        assert_eq!(report.locked_angle, 0.0);
    }

    #[test]
    fn test_command_carries_smoothed_angle() {
        let mut tracker = Tracker::new(&TrackingConfig::default());
        for _ in 0..15 {
            tracker.process_frame(&centered());
        }
        tracker.process_frame(&far_right());

        let report = tracker.process_frame(&far_right()).unwrap();
        assert!((report.smoothed_angle - 2.0 * 35.2 / 15.0).abs() < 1e-9);
        assert_eq!(report.decision.state, MotionState::Rotating);
        assert_eq!(report.decision.commanded_angle, Some(report.smoothed_angle));
        assert_ne!(report.decision.commanded_angle, Some(report.raw_angle));
        assert_eq!(tracker.controller().current_angle(), report.smoothed_angle);
    }

    #[test]
    fn test_reset_starts_fresh_session() {
        let mut tracker = Tracker::new(&TrackingConfig::default());
        tracker.process_frame(&FrameObservation::detected(geometry(), Subject::from_hips_x(0.8, 0.9)));

        tracker.reset();

        assert!(tracker.filter().is_empty());
        assert_eq!(tracker.controller().current_angle(), 0.0);
    }
}
