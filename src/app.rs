//! Main application module driving the tracking loop.

use crate::{
    config::Config,
    error::Result,
    sink::{CommandSink, RotorCommand},
    source::LandmarkSource,
    tracker::{FrameReport, Tracker},
};
use log::{debug, info};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames pulled from the source
    pub frames: usize,
    /// Frames with a detected subject
    pub detections: usize,
    /// Commands sent to the rotor
    pub commands: usize,
}

/// Main application struct
pub struct TrackerApp<S, K> {
    config: Config,
    tracker: Tracker,
    source: S,
    sink: K,
    running: Arc<AtomicBool>,
}

impl<S: LandmarkSource, K: CommandSink> TrackerApp<S, K> {
    /// Create a new tracking application
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: Config, source: S, sink: K) -> Result<Self> {
        info!("Initializing rotor tracker");
        config.validate()?;

        let tracker = Tracker::new(&config.tracking);

        Ok(Self {
            config,
            tracker,
            source,
            sink,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Flag that keeps the loop alive; store `false` to stop after the
    /// current frame
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Run until the source is exhausted or a stop is requested
    pub fn run(&mut self) -> Result<RunSummary> {
        self.log_banner();

        let frame_period = match self.config.camera.replay_fps {
            0 => None,
            fps => Some(Duration::from_secs(1) / fps),
        };

        let mut summary = RunSummary::default();
        let start_time = Instant::now();

        while self.running.load(Ordering::SeqCst) {
            let frame_start = Instant::now();

            let Some(observation) = self.source.next_frame()? else {
                info!("End of landmark stream reached");
                break;
            };
            summary.frames += 1;

            if let Some(report) = self.tracker.process_frame(&observation) {
                summary.detections += 1;
                self.dispatch(&report, &mut summary)?;
            }

            if let Some(period) = frame_period {
                if let Some(remaining) = period.checked_sub(frame_start.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }

        if !self.running.load(Ordering::SeqCst) {
            info!("Exit requested by user");
        }

        info!(
            "Processed {} frames ({} with a subject) in {:.1}s, sent {} commands, rotor locked at {:.1} deg",
            summary.frames,
            summary.detections,
            start_time.elapsed().as_secs_f64(),
            summary.commands,
            self.tracker.controller().current_angle()
        );
        Ok(summary)
    }

    fn dispatch(&mut self, report: &FrameReport, summary: &mut RunSummary) -> Result<()> {
        debug!(
            "Status: {} | Target Angle: {:.1} | Locked Angle: {:.1}",
            report.decision.state, report.smoothed_angle, report.locked_angle
        );
        if let Some(angle) = report.decision.commanded_angle {
            self.sink.send(RotorCommand::new(angle))?;
            summary.commands += 1;
        }
        Ok(())
    }

    fn log_banner(&self) {
        let tracking = &self.config.tracking;
        info!("---------------------------------------");
        info!("  ROTOR TRACKING SYSTEM STARTED");
        info!("  Smoothing: {} frames", tracking.smoothing_window);
        info!("  Deadband:  {} degrees", tracking.movement_threshold);
        info!("  HFOV:      {} degrees", tracking.horizontal_fov);
        info!("---------------------------------------");
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        landmarks::{FrameGeometry, FrameObservation, Subject},
        sink::RecordingSink,
        source::ReplaySource,
    };
    use std::sync::OnceLock;

    /// Records commands and clears the run flag on the first one
    #[derive(Default)]
    struct StopOnCommand {
        running: Arc<OnceLock<Arc<AtomicBool>>>,
        sent: Vec<RotorCommand>,
    }

    impl CommandSink for StopOnCommand {
        fn send(&mut self, command: RotorCommand) -> Result<()> {
            self.sent.push(command);
            if let Some(running) = self.running.get() {
                running.store(false, Ordering::SeqCst);
            }
            Ok(())
        }
    }

    fn frames(hips: &[Option<(f64, f64)>]) -> ReplaySource {
        let geometry = FrameGeometry::new(640, 480).unwrap();
        ReplaySource::new(
            hips.iter()
                .map(|h| match h {
                    Some((l, r)) => FrameObservation::detected(geometry, Subject::from_hips_x(*l, *r)),
                    None => FrameObservation::missed(geometry),
                })
                .collect(),
        )
    }

    #[test]
    fn test_run_counts_frames_and_commands() {
        let source = frames(&[Some((0.40, 0.50)), None, Some((0.40, 0.50)), None]);
        let mut app = TrackerApp::new(Config::default(), source, RecordingSink::new()).unwrap();

        let summary = app.run().unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames: 4,
                detections: 2,
                commands: 1
            }
        );
        assert_eq!(app.sink().commands().len(), 1);
    }

    #[test]
    fn test_stop_handle_halts_before_first_frame() {
        let source = frames(&[Some((0.9, 0.9)); 10]);
        let mut app = TrackerApp::new(Config::default(), source, RecordingSink::new()).unwrap();

        app.stop_handle().store(false, Ordering::SeqCst);
        let summary = app.run().unwrap();

        assert_eq!(summary.frames, 0);
        assert!(app.sink().commands().is_empty());
    }

    #[test]
    fn test_stop_mid_run_finishes_current_frame_only() {
        let source = frames(&[Some((0.9, 0.9)); 10]);
        let sink = StopOnCommand::default();
        let slot = Arc::clone(&sink.running);
        let mut app = TrackerApp::new(Config::default(), source, sink).unwrap();
        assert!(slot.set(app.stop_handle()).is_ok());

        let summary = app.run().unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames: 1,
                detections: 1,
                commands: 1
            }
        );
        assert_eq!(app.sink().sent.len(), 1);
        assert!(!app.stop_handle().load(Ordering::SeqCst));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.tracking.smoothing_window = 0;
        assert!(TrackerApp::new(config, frames(&[]), RecordingSink::new()).is_err());
    }
}
