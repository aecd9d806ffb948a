//! Signal filtering for smoothing bearing estimates.
//!
//! Raw bearings jitter from frame to frame because landmark detection is
//! noisy. The tracker smooths them before the deadband decides whether the
//! rotor moves.

/// Moving average filter over a fixed window of recent angles
pub mod moving_average;

pub use moving_average::MovingAverageFilter;
