// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Exporters for build traces and rendered frames

use crate::ast::Build;
use crate::render::{frame_to_svg, Frame};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct TraceDocument<'a> {
    title: &'a str,
    expression: &'a str,
    #[serde(flatten)]
    build: &'a Build,
}

/// Serialize a build (arena and per-step stacks) as pretty JSON
pub fn trace_to_json(build: &Build, title: &str, expression: &str) -> Result<String> {
    let document = TraceDocument {
        title,
        expression,
        build,
    };
    serde_json::to_string_pretty(&document).context("Failed to serialize build trace")
}

/// Write several titled builds of one expression into a single JSON file
pub fn export_trace_json(builds: &[(&str, &Build)], expression: &str, path: &Path) -> Result<()> {
    let documents: Vec<TraceDocument> = builds
        .iter()
        .map(|&(title, build)| TraceDocument {
            title,
            expression,
            build,
        })
        .collect();

    let json = serde_json::to_string_pretty(&documents).context("Failed to serialize build traces")?;
    fs::write(path, json).with_context(|| format!("Failed to write trace file: {}", path.display()))?;
    Ok(())
}

/// Write each frame as `<prefix>-<step>.svg` inside `dir`, creating it if needed
pub fn export_svg_frames(frames: &[Frame], dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create frame directory: {}", dir.display()))?;

    let width = frames.len().to_string().len();
    frames
        .iter()
        .map(|frame| {
            let path = dir.join(format!("{}-{:0width$}.svg", prefix, frame.step, width = width));
            fs::write(&path, frame_to_svg(frame))
                .with_context(|| format!("Failed to write frame: {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
