// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SVG rendering of frames

use super::frame::Frame;
use std::fmt::Write;

const SCALE: f64 = 80.0;
const MARGIN: f64 = 40.0;
const TITLE_HEIGHT: f64 = 40.0;
const BOX_HEIGHT: f64 = 26.0;
const CHAR_WIDTH: f64 = 9.0;

/// Render a frame as a standalone SVG document
pub fn frame_to_svg(frame: &Frame) -> String {
    let layout = &frame.layout;
    let (min_x, max_x, min_y, max_y) = layout.bounds().unwrap_or((0.0, 0.0, 0.0, 0.0));

    let width = (max_x - min_x) * SCALE + 2.0 * MARGIN;
    let height = (max_y - min_y) * SCALE + 2.0 * MARGIN + TITLE_HEIGHT;
    let to_px = |x: f64, y: f64| {
        (
            (x - min_x) * SCALE + MARGIN,
            (max_y - y) * SCALE + MARGIN + TITLE_HEIGHT,
        )
    };

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        width, height, width, height
    );
    let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="16" text-anchor="middle">{}</text>"#,
        width / 2.0,
        TITLE_HEIGHT / 2.0 + 6.0,
        escape(&frame.title)
    );

    for edge in layout.edges() {
        if let (Some((x1, y1)), Some((x2, y2))) = (layout.position(edge.parent), layout.position(edge.child)) {
            let (x1, y1) = to_px(x1, y1);
            let (x2, y2) = to_px(x2, y2);
            let _ = writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
                x1, y1, x2, y2
            );
        }
    }

    for node in layout.nodes() {
        let (cx, cy) = to_px(node.x, node.y);
        let box_width = node.label.chars().count() as f64 * CHAR_WIDTH + 14.0;
        let _ = writeln!(
            svg,
            r#"  <g id="node-{}"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="white" stroke="black"/><text x="{:.1}" y="{:.1}" font-family="monospace" font-size="14" text-anchor="middle" dominant-baseline="central">{}</text></g>"#,
            node.id.index(),
            cx - box_width / 2.0,
            cy - BOX_HEIGHT / 2.0,
            box_width,
            BOX_HEIGHT,
            cx,
            cy,
            escape(&node.label)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Notation, TreeBuilder};
    use crate::notation::infix_to_rpn;
    use crate::render::{frames, LayoutOptions};

    #[test]
    fn test_svg_has_every_node_and_edge() {
        let build = TreeBuilder::build(&infix_to_rpn("2*2+1").unwrap(), Notation::Postfix).unwrap();
        let frames = frames(&build, "RPN", &LayoutOptions::default());
        let svg = frame_to_svg(frames.last().unwrap());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("RPN - Step 5"));
        assert_eq!(svg.matches("<g id=\"node-").count(), 5);
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
