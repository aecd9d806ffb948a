//! Constants used throughout the application

/// Number of raw angles averaged by the smoothing filter
pub const DEFAULT_SMOOTHING_WINDOW: usize = 15;

/// Minimum change in degrees before the rotor is commanded to move
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 3.0;

/// Horizontal field of view of a standard webcam, in degrees
pub const DEFAULT_HORIZONTAL_FOV: f64 = 88.0;

/// Default capture size
pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Replay pacing, 0 replays frames as fast as they can be processed
pub const DEFAULT_REPLAY_FPS: u32 = 0;

/// Angle the rotor is assumed to point at when a session starts
pub const NEUTRAL_ANGLE: f64 = 0.0;

/// Divisor locating the optical center column
pub const CENTER_DIVISOR: u32 = 2;
