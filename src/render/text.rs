// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plain-text rendering of frames for terminals

use super::frame::Frame;
use super::layout::TreeLayout;
use crate::ast::NodeId;

/// Render a frame as a header, the stack contents and an outline of the
/// top-of-stack tree (left child listed before right child)
pub fn frame_to_text(frame: &Frame) -> String {
    let mut out = format!("{}  [token: {}]\n", frame.title, frame.token);
    out.push_str(&format!("stack: [{}]\n", frame.stack.join(", ")));

    if let Some(root) = frame.layout.nodes().first() {
        out.push('\n');
        out.push_str(&root.label);
        out.push('\n');
        outline(&frame.layout, root.id, &mut out);
    }

    out
}

fn outline(layout: &TreeLayout, root: NodeId, out: &mut String) {
    let mut pending: Vec<(NodeId, String, bool)> = Vec::new();
    push_children(layout, root, "", &mut pending);

    while let Some((id, prefix, last)) = pending.pop() {
        let label = layout.get(id).map(|n| n.label.as_str()).unwrap_or("?");

        out.push_str(&prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(label);
        out.push('\n');

        let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
        push_children(layout, id, &nested, &mut pending);
    }
}

/// Queue children so the left one is popped first
fn push_children(layout: &TreeLayout, id: NodeId, prefix: &str, pending: &mut Vec<(NodeId, String, bool)>) {
    let children: Vec<NodeId> = layout.children(id).collect();
    for (i, child) in children.iter().enumerate().rev() {
        pending.push((*child, prefix.to_string(), i + 1 == children.len()));
    }
}
