// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Timed playback of frame sequences

use super::frame::Frame;
use super::text::frame_to_text;
use anyhow::{Context, Result};
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Destination that draws one frame at a time
pub trait FrameSink {
    /// Called once before the frames of a titled sequence are shown
    fn begin(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn show(&mut self, frame: &Frame) -> Result<()>;
}

/// Draws text frames to a writer, clearing the screen before each one.
///
/// The header and the announcement of the current sequence are redrawn
/// above every frame so clearing never hides them.
pub struct TerminalSink<W: Write> {
    out: W,
    clear: bool,
    header: String,
    section: String,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: true,
            header: String::new(),
            section: String::new(),
        }
    }

    /// Append frames one after another instead of redrawing in place
    pub fn without_clear(out: W) -> Self {
        Self {
            clear: false,
            ..Self::new(out)
        }
    }

    /// Text kept at the top of the screen
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn begin(&mut self, title: &str) -> Result<()> {
        self.section = format!("Visualizing {}...", title);
        if !self.clear {
            writeln!(self.out, "\n{}", self.section).context("Failed to write section")?;
        }
        Ok(())
    }

    fn show(&mut self, frame: &Frame) -> Result<()> {
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H").context("Failed to clear terminal")?;
            if !self.header.is_empty() {
                writeln!(self.out, "{}\n", self.header).context("Failed to write header")?;
            }
            if !self.section.is_empty() {
                writeln!(self.out, "{}\n", self.section).context("Failed to write section")?;
            }
        }
        writeln!(self.out, "{}", frame_to_text(frame)).context("Failed to write frame")?;
        self.out.flush().context("Failed to flush frame")?;
        Ok(())
    }
}

/// Steps through frames at a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct Player {
    interval: Duration,
}

impl Player {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Show every frame in order, holding each for one interval
    pub fn play(&self, frames: &[Frame], sink: &mut dyn FrameSink) -> Result<()> {
        for frame in frames {
            debug!(step = frame.step, title = %frame.title, "showing frame");
            sink.show(frame)?;
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
