//! Deadband control for the rotor.
//!
//! The controller remembers where the rotor was last sent and only issues a
//! new target when the smoothed bearing has drifted further than the
//! movement threshold. Sub-threshold jitter never reaches the motor.

use crate::constants::NEUTRAL_ANGLE;
use std::time::Instant;

/// Outcome of evaluating one smoothed bearing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Rotor stays where it is
    Holding,
    /// Rotor was sent to a new angle this frame
    Rotating,
}

impl MotionState {
    /// Status label shown to the operator
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Holding => "HOLDING",
            Self::Rotating => "ROTATING",
        }
    }
}

impl std::fmt::Display for MotionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`ActuatorController::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub state: MotionState,
    /// Target angle to send, present only when rotating
    pub commanded_angle: Option<f64>,
}

impl Decision {
    const HOLD: Self = Self {
        state: MotionState::Holding,
        commanded_angle: None,
    };

    const fn rotate(angle: f64) -> Self {
        Self {
            state: MotionState::Rotating,
            commanded_angle: Some(angle),
        }
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.state == MotionState::Rotating
    }
}

/// Where the rotor is believed to point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorState {
    /// Last commanded angle in degrees
    pub current_angle: f64,
    /// When the last command was issued, `None` until the first move
    pub last_command_time: Option<Instant>,
}

impl Default for ActuatorState {
    fn default() -> Self {
        Self {
            current_angle: NEUTRAL_ANGLE,
            last_command_time: None,
        }
    }
}

/// Deadband controller owning the rotor's locked angle
#[derive(Debug, Clone)]
pub struct ActuatorController {
    movement_threshold: f64,
    state: ActuatorState,
}

impl ActuatorController {
    /// Create a controller starting at the neutral angle
    #[must_use]
    pub fn new(movement_threshold: f64) -> Self {
        assert!(
            movement_threshold.is_finite() && movement_threshold >= 0.0,
            "Threshold must be non-negative"
        );
        Self {
            movement_threshold,
            state: ActuatorState::default(),
        }
    }

    /// Compare a smoothed bearing against the locked angle.
    ///
    /// Moves only when the difference strictly exceeds the threshold; a
    /// difference exactly equal to it holds.
    pub fn evaluate(&mut self, smoothed: f64) -> Decision {
        let diff = (smoothed - self.state.current_angle).abs();

        if diff > self.movement_threshold {
            self.state.current_angle = smoothed;
            self.state.last_command_time = Some(Instant::now());
            Decision::rotate(smoothed)
        } else {
            Decision::HOLD
        }
    }

    /// Return to the neutral angle for a new session
    pub fn reset(&mut self) {
        self.state = ActuatorState::default();
    }

    #[must_use]
    pub const fn state(&self) -> &ActuatorState {
        &self.state
    }

    /// Last commanded angle in degrees
    #[must_use]
    pub const fn current_angle(&self) -> f64 {
        self.state.current_angle
    }

    #[must_use]
    pub const fn movement_threshold(&self) -> f64 {
        self.movement_threshold
    }
}
