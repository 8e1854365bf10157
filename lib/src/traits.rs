//! The collaborators of a [`Game`](crate::Game): where steps come from,
//! and where frames go.

use crate::{error::Error, game::Step};
use std::{io::Write, thread, time::Duration};

/// A source of step signals, asked once per frame.
pub trait StepSource {
    /// Waits for the signal to go on with the next generation.
    ///
    /// An error is treated as [`Step::Continue`].
    fn next_step(&mut self) -> Result<Step, Error>;
}

/// Somewhere to show frames.
pub trait Screen {
    /// Shows one frame.
    fn show(&mut self, frame: &str) -> Result<(), Error>;
}

/// Always goes on, optionally pausing before each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoAdvance {
    delay: Duration,
}

impl AutoAdvance {
    /// Goes on without pausing.
    pub fn new() -> Self {
        AutoAdvance::default()
    }

    /// Pauses for `delay` before each step.
    pub fn with_delay(delay: Duration) -> Self {
        AutoAdvance { delay }
    }
}

impl StepSource for AutoAdvance {
    fn next_step(&mut self) -> Result<Step, Error> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(Step::Continue)
    }
}

/// A [`Screen`] which writes frames to a writer, such as the standard output.
///
/// Frames are separated by an empty line.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    /// Writes frames to `out`.
    pub fn new(out: W) -> Self {
        Console { out }
    }

    /// Gets back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for Console<W> {
    fn show(&mut self, frame: &str) -> Result<(), Error> {
        writeln!(self.out, "{}", frame).map_err(Error::OutputError)?;
        self.out.flush().map_err(Error::OutputError)
    }
}
