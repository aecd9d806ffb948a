//! Rotor tracking library for pointing a camera-aimed actuator at a person.
//!
//! The pipeline turns the on-screen position of a tracked person into a
//! target angle for a rotor:
//! 1. Bearing estimation from the hip landmarks and the camera field of view
//! 2. Moving average smoothing over recent bearings
//! 3. Deadband control deciding whether the rotor moves or holds
//!
//! Body detection, frame capture and the motor driver are external; they
//! plug in through the [`source::LandmarkSource`] and [`sink::CommandSink`]
//! traits.
//!
//! # Examples
//!
//! ## Per-frame processing
//!
//! ```
//! use rotor_tracker::{
//!     config::TrackingConfig,
//!     landmarks::{FrameGeometry, FrameObservation, Subject},
//!     tracker::Tracker,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tracker = Tracker::new(&TrackingConfig::default());
//! let geometry = FrameGeometry::new(640, 480)?;
//!
//! // Hips at 40% and 50% of the frame width
//! let frame = FrameObservation::detected(geometry, Subject::from_hips_x(0.40, 0.50));
//! if let Some(report) = tracker.process_frame(&frame) {
//!     println!("Status: {}, target {:.1} deg", report.decision.state, report.smoothed_angle);
//!     if let Some(angle) = report.decision.commanded_angle {
//!         println!("Rotate to {:.1} deg", angle);
//!     }
//! }
//!
//! // Nobody in view: nothing changes, the rotor holds
//! assert!(tracker.process_frame(&FrameObservation::missed(geometry)).is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Replaying a recorded trace
//!
//! ```no_run
//! use rotor_tracker::{
//!     app::TrackerApp, config::Config, sink::ConsoleSink, source::ReplaySource,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("tracker.yaml")?;
//! let source = ReplaySource::from_file("session.yaml", config.camera.geometry()?)?;
//!
//! let mut app = TrackerApp::new(config, source, ConsoleSink::stdout())?;
//! let summary = app.run()?;
//! println!("{} commands sent", summary.commands);
//! # Ok(())
//! # }
//! ```

/// Per-frame observation types: frame geometry, landmarks, subjects
pub mod landmarks;

/// Bearing estimation from hip landmarks
pub mod angle_estimation;

/// Signal filtering for smoothing bearings
pub mod filters;

/// Deadband controller for the rotor
pub mod actuator;

/// Estimate, smooth and gate pipeline
pub mod tracker;

/// Landmark sources
pub mod source;

/// Command sinks
pub mod sink;

/// Main application loop
pub mod app;

/// Command line interface
pub mod cli;

/// Utility functions for numeric conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
