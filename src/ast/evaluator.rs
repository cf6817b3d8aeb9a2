// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tree evaluation and infix rendering

use super::node::{ExpressionTree, NodeId, NodeKind};
use crate::notation::Operator;

/// Pending output of the infix writer
enum Piece {
    Visit(NodeId),
    Open,
    Close,
    Op(Operator),
}

impl ExpressionTree {
    /// Arithmetic value of the whole tree
    pub fn evaluate(&self) -> f64 {
        self.evaluate_node(self.root())
    }

    /// Arithmetic value of the subtree rooted at `id`.
    ///
    /// Children always precede their parent in the arena, so one forward
    /// pass over the prefix of the arena ending at `id` is enough.
    /// Ids outside the arena evaluate to NaN.
    pub fn evaluate_node(&self, id: NodeId) -> f64 {
        if id.index() >= self.len() {
            return f64::NAN;
        }

        let end = id.index() + 1;
        let mut values: Vec<f64> = Vec::with_capacity(end);

        for node in &self.nodes()[..end] {
            let value = match &node.kind {
                NodeKind::Operand { literal } => literal.value(),
                NodeKind::Operator { op, left, right } => {
                    let operand = |id: &NodeId| values.get(id.index()).copied().unwrap_or(f64::NAN);
                    op.apply(operand(left), operand(right))
                }
            };
            values.push(value);
        }

        values.last().copied().unwrap_or(f64::NAN)
    }

    /// Fully parenthesized infix form of the subtree rooted at `id`
    pub fn to_infix(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut pending = vec![Piece::Visit(id)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Open => out.push('('),
                Piece::Close => out.push(')'),
                Piece::Op(op) => {
                    out.push(' ');
                    out.push(op.symbol());
                    out.push(' ');
                }
                Piece::Visit(current) => match self.get(current).map(|node| &node.kind) {
                    Some(NodeKind::Operand { literal }) => out.push_str(literal.text()),
                    Some(NodeKind::Operator { op, left, right }) => {
                        pending.push(Piece::Close);
                        pending.push(Piece::Visit(*right));
                        pending.push(Piece::Op(*op));
                        pending.push(Piece::Visit(*left));
                        pending.push(Piece::Open);
                    }
                    None => {}
                },
            }
        }

        out
    }
}
