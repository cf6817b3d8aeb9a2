// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - reading expressions, exporting traces and frames

mod export;
mod importer;

pub use export::{export_svg_frames, export_trace_json, trace_to_json};
pub use importer::{import_expression_file, parse_expression_list, read_expression};
