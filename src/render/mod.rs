// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Trace rendering
//!
//! Lays out the tree on top of each trace step and draws it as SVG or
//! terminal text, one full frame per step

mod frame;
mod layout;
mod player;
mod svg;
mod text;

pub use frame::{frames, Frame};
pub use layout::{Edge, LayoutOptions, PlacedNode, TreeLayout};
pub use player::{FrameSink, Player, TerminalSink};
pub use svg::frame_to_svg;
pub use text::frame_to_text;
