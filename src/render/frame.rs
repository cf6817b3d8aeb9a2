// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Turning a build trace into drawable frames

use super::layout::{LayoutOptions, TreeLayout};
use crate::ast::Build;
use serde::Serialize;

/// One step of a tree-construction animation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// 1-based step number
    pub step: usize,
    pub title: String,
    /// Token processed in this step
    pub token: String,
    /// Labels of every subtree root on the stack, bottom first
    pub stack: Vec<String>,
    /// Layout of the tree on top of the stack
    pub layout: TreeLayout,
}

/// Build one frame per trace step. Each frame is complete on its own.
pub fn frames(build: &Build, title: &str, options: &LayoutOptions) -> Vec<Frame> {
    build
        .trace
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let layout = step
                .top()
                .map(|top| TreeLayout::compute(&build.tree, top, options))
                .unwrap_or_default();

            Frame {
                step: index + 1,
                title: format!("{} - Step {}", title, index + 1),
                token: step.token.to_string(),
                stack: step
                    .stack
                    .iter()
                    .filter_map(|id| build.tree.get(*id))
                    .map(|node| node.label())
                    .collect(),
                layout,
            }
        })
        .collect()
}
