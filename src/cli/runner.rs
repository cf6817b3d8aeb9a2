// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Conversion session runner

use super::reporter::Reporter;
use crate::config::Config;
use crate::io;
use crate::render::{frames, FrameSink, Player, TerminalSink};
use crate::{convert, Conversion};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Titles used for the two visualizations
pub const RPN_TITLE: &str = "RPN";
pub const PN_TITLE: &str = "PN";

/// Totals of an expression-list run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Runs conversions and drives reporting, export and playback
pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert one expression, report it, export what is configured and
    /// play both animations on the terminal
    pub fn run(&self, expression: &str) -> Result<Conversion> {
        let start = Instant::now();
        let conversion = convert(expression).with_context(|| format!("Failed to convert {:?}", expression))?;
        debug!(elapsed = ?start.elapsed(), "conversion finished");

        Reporter::report_conversion(&conversion);
        self.export(&conversion)?;

        if self.config.animate {
            let stdout = std::io::stdout();
            let mut sink = Self::terminal_sink(&conversion, stdout.lock());
            self.animate(&conversion, &mut sink)?;
        }

        Ok(conversion)
    }

    /// Write the JSON trace and SVG frames if the config asks for them
    pub fn export(&self, conversion: &Conversion) -> Result<()> {
        if let Some(path) = &self.config.trace_json {
            io::export_trace_json(
                &[(RPN_TITLE, &conversion.rpn_build), (PN_TITLE, &conversion.pn_build)],
                &conversion.expression,
                path,
            )?;
            info!(path = %path.display(), "wrote build traces");
        }

        if let Some(dir) = &self.config.frames_dir {
            let layout = self.config.layout();
            let mut written = io::export_svg_frames(
                &frames(&conversion.rpn_build, RPN_TITLE, &layout),
                dir,
                "rpn",
            )?;
            written.extend(io::export_svg_frames(
                &frames(&conversion.pn_build, PN_TITLE, &layout),
                dir,
                "pn",
            )?);
            info!(dir = %dir.display(), frames = written.len(), "wrote SVG frames");
        }

        Ok(())
    }

    /// Terminal sink that keeps both sequences above every frame
    pub fn terminal_sink<W: Write>(conversion: &Conversion, out: W) -> TerminalSink<W> {
        TerminalSink::new(out).with_header(Reporter::sequences_header(conversion))
    }

    /// Play the RPN build, then the PN build
    pub fn animate(&self, conversion: &Conversion, sink: &mut dyn FrameSink) -> Result<()> {
        let player = Player::new(self.config.interval());
        let layout = self.config.layout();

        for (title, build) in [(RPN_TITLE, &conversion.rpn_build), (PN_TITLE, &conversion.pn_build)] {
            sink.begin(title)?;
            player.play(&frames(build, title, &layout), sink)?;
        }

        Ok(())
    }

    /// Convert every listed expression, reporting failures and moving on
    pub fn run_batch(&self, expressions: &[(usize, String)]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (line, expression) in expressions {
            match convert(expression) {
                Ok(conversion) => {
                    Reporter::report_batch_entry(*line, expression, &conversion);
                    summary.converted += 1;
                }
                Err(e) => {
                    Reporter::report_error(&format!("line {}: {:?}: {}", line, expression, e));
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
