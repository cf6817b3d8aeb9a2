// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layered configuration: defaults, `notation.toml`, environment

use crate::render::LayoutOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "notation.toml";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between animation frames, in milliseconds
    pub interval_ms: u64,
    /// Horizontal offset of the root's children in diagrams
    pub spacing: f64,
    /// Vertical distance between tree layers in diagrams
    pub vertical_step: f64,
    /// Play the build animations in the terminal
    pub animate: bool,
    /// Directory to write SVG frames into
    pub frames_dir: Option<PathBuf>,
    /// File to write the build traces into, as JSON
    pub trace_json: Option<PathBuf>,
    /// Print a prompt before reading from standard input
    pub prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            spacing: 1.5,
            vertical_step: 1.0,
            animate: true,
            frames_dir: None,
            trace_json: None,
            prompt: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `path` (or `notation.toml` if present), then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `NOTATION_*` overrides; unparsable values are ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(interval) = lookup("NOTATION_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.interval_ms = interval;
        }

        if let Some(dir) = lookup("NOTATION_FRAMES_DIR") {
            self.frames_dir = Some(PathBuf::from(dir));
        }

        if let Some(animate) = lookup("NOTATION_ANIMATE").and_then(|v| v.parse().ok()) {
            self.animate = animate;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            spacing: self.spacing,
            vertical_step: self.vertical_step,
        }
    }
}
