//! Command sinks receiving rotor targets.
//!
//! Commands are fire-and-forget: the tracker neither waits for an
//! acknowledgement nor retries.

use crate::Result;
use log::debug;
use std::{
    fmt,
    io::{self, Write},
};

/// Target angle for the rotor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorCommand {
    /// Bearing in degrees, positive to the right of the camera axis
    pub angle: f64,
}

impl RotorCommand {
    #[must_use]
    pub const fn new(angle: f64) -> Self {
        Self { angle }
    }
}

impl fmt::Display for RotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotate to {:.1} deg", self.angle)
    }
}

/// Receiver of rotor commands, typically a motor driver
pub trait CommandSink {
    /// Deliver one command
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be handed over
    fn send(&mut self, command: RotorCommand) -> Result<()>;
}

/// Prints each command as a line of text
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    /// Print commands to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CommandSink for ConsoleSink<W> {
    fn send(&mut self, command: RotorCommand) -> Result<()> {
        writeln!(self.out, ">>> ROTOR COMMAND: {command}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every command in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    commands: Vec<RotorCommand>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[RotorCommand] {
        &self.commands
    }
}

impl CommandSink for RecordingSink {
    fn send(&mut self, command: RotorCommand) -> Result<()> {
        debug!("Recorded command #{}: {}", self.commands.len() + 1, command);
        self.commands.push(command);
        Ok(())
    }
}
