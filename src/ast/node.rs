// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tree node definitions

use crate::notation::{Literal, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Identity of a node inside its tree's arena.
///
/// Two nodes carrying the same literal are still different positions
/// in the tree; ids keep them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node of an expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl Node {
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Operand { literal } => literal.to_string(),
            NodeKind::Operator { op, .. } => op.to_string(),
        }
    }

    /// `(left, right)` for operator nodes, `None` for leaves
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Operand { .. } => None,
            NodeKind::Operator { left, right, .. } => Some((left, right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Operand { .. })
    }
}

/// Types of tree nodes. Operators are always binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Operand {
        literal: Literal,
    },
    Operator {
        op: Operator,
        left: NodeId,
        right: NodeId,
    },
}

/// Arena-backed binary expression tree.
///
/// Nodes are stored in creation order, so every child precedes its
/// parent in the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ExpressionTree {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids of the subtree rooted at `id`, in pre-order (node, left, right)
    pub fn preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            order.push(current);
            if let Some((left, right)) = node.children() {
                pending.push(right);
                pending.push(left);
            }
        }

        order
    }

    /// Number of layers below and including `id`
    pub fn height(&self, id: NodeId) -> usize {
        let mut height = 0;
        let mut pending = vec![(id, 1)];

        while let Some((current, depth)) = pending.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            height = height.max(depth);
            if let Some((left, right)) = node.children() {
                pending.push((right, depth + 1));
                pending.push((left, depth + 1));
            }
        }

        height
    }
}

impl Index<NodeId> for ExpressionTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}
