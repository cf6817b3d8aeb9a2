// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tree module
//!
//! Arena-backed binary expression trees, built from postfix or prefix
//! token sequences with a step-by-step trace

mod builder;
mod evaluator;
mod node;

pub use builder::{Build, BuildTrace, Notation, TraceStep, TreeBuilder};
pub use node::{ExpressionTree, Node, NodeId, NodeKind};
