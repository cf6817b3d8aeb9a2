// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node placement for tree diagrams

use crate::ast::{ExpressionTree, NodeId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Spacing parameters for tree layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Horizontal offset of the root's children; layer `n` uses `spacing / n`
    pub spacing: f64,
    /// Vertical distance between layers
    pub vertical_step: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing: 1.5,
            vertical_step: 1.0,
        }
    }
}

/// A node with its diagram coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Parent to child connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// Diagram coordinates for one subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeLayout {
    nodes: Vec<PlacedNode>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: AHashMap<NodeId, usize>,
}

impl TreeLayout {
    /// Place the subtree rooted at `root`, with the root at the origin.
    ///
    /// Edges are listed parent-first, left child before right child.
    pub fn compute(tree: &ExpressionTree, root: NodeId, options: &LayoutOptions) -> Self {
        let mut layout = Self::default();
        let mut pending = vec![(root, 0.0_f64, 0.0_f64, 1_u32)];

        while let Some((id, x, y, layer)) = pending.pop() {
            let Some(node) = tree.get(id) else {
                continue;
            };

            layout.index.insert(id, layout.nodes.len());
            layout.nodes.push(PlacedNode {
                id,
                label: node.label(),
                x,
                y,
            });

            if let Some((left, right)) = node.children() {
                let offset = options.spacing / f64::from(layer);
                let child_y = y - options.vertical_step;
                layout.edges.push(Edge { parent: id, child: left });
                layout.edges.push(Edge { parent: id, child: right });
                pending.push((right, x + offset, child_y, layer + 1));
                pending.push((left, x - offset, child_y, layer + 1));
            }
        }

        layout
    }

    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&PlacedNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.get(id).map(|node| (node.x, node.y))
    }

    /// Children of `id` in left, right order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.parent == id)
            .map(|edge| edge.child)
    }

    /// `(min_x, max_x, min_y, max_y)`, or `None` for an empty layout
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        let init = (first.x, first.x, first.y, first.y);
        Some(self.nodes.iter().fold(init, |(min_x, max_x, min_y, max_y), node| {
            (
                min_x.min(node.x),
                max_x.max(node.x),
                min_y.min(node.y),
                max_y.max(node.y),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Notation, TreeBuilder};
    use crate::notation::infix_to_rpn;
    use approx::assert_relative_eq;

    fn tree(expression: &str) -> ExpressionTree {
        TreeBuilder::build(&infix_to_rpn(expression).unwrap(), Notation::Postfix)
            .unwrap()
            .tree
    }

    #[test]
    fn test_offsets_are_spacing_divided_by_layer() {
        // (1 + 2) * 3
        let tree = tree("(1+2)*3");
        let layout = TreeLayout::compute(&tree, tree.root(), &LayoutOptions::default());

        let root = tree.root();
        let (plus, three) = tree[root].children().unwrap();
        let (one, two) = tree[plus].children().unwrap();

        assert_eq!(layout.position(root), Some((0.0, 0.0)));
        assert_eq!(layout.position(plus), Some((-1.5, -1.0)));
        assert_eq!(layout.position(three), Some((1.5, -1.0)));

        let (x, y) = layout.position(one).unwrap();
        assert_relative_eq!(x, -2.25);
        assert_relative_eq!(y, -2.0);
        assert_relative_eq!(layout.position(two).unwrap().0, -0.75);

        // layer 3 children sit spacing / 3 away from their parent
        let tree = self::tree("((1+2)*3)-4");
        let layout = TreeLayout::compute(&tree, tree.root(), &LayoutOptions::default());
        let (times, _) = tree[tree.root()].children().unwrap();
        let (plus, _) = tree[times].children().unwrap();
        let (one, two) = tree[plus].children().unwrap();

        assert_relative_eq!(layout.position(times).unwrap().0, -1.5);
        assert_relative_eq!(layout.position(plus).unwrap().0, -2.25);
        assert_relative_eq!(layout.position(one).unwrap().0, -2.75);
        assert_relative_eq!(layout.position(two).unwrap().0, -1.75);
        assert_relative_eq!(layout.position(one).unwrap().1, -3.0);
    }

    #[test]
    fn test_duplicate_labels_get_own_positions() {
        let tree = tree("2*2");
        let layout = TreeLayout::compute(&tree, tree.root(), &LayoutOptions::default());
        assert_eq!(layout.nodes().len(), 3);

        let twos: Vec<_> = layout.nodes().iter().filter(|n| n.label == "2").collect();
        assert_eq!(twos.len(), 2);
        assert_ne!(twos[0].x, twos[1].x);
    }

    #[test]
    fn test_edges_and_children() {
        let tree = tree("4-1");
        let layout = TreeLayout::compute(&tree, tree.root(), &LayoutOptions::default());
        assert_eq!(layout.edges().len(), 2);

        let labels: Vec<String> = layout
            .children(tree.root())
            .map(|id| layout.get(id).unwrap().label.clone())
            .collect();
        assert_eq!(labels, ["4", "1"]);
    }

    #[test]
    fn test_bounds() {
        let tree = tree("1+2");
        let layout = TreeLayout::compute(&tree, tree.root(), &LayoutOptions::default());
        assert_eq!(layout.bounds(), Some((-1.5, 1.5, -1.0, 0.0)));
        assert_eq!(TreeLayout::default().bounds(), None);
    }
}
