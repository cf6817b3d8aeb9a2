// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stack-based tree builder with a recorded build trace

use super::node::{ExpressionTree, Node, NodeId, NodeKind};
use crate::error::{NotationError, Result};
use crate::notation::{Operator, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Order of the token sequence fed to the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Operators follow their operands (RPN)
    Postfix,
    /// Operators precede their operands (PN)
    Prefix,
}

/// Stack contents right after one token was processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Index of the token in the input sequence
    pub position: usize,
    pub token: Token,
    /// Subtree roots on the working stack, bottom first
    pub stack: Vec<NodeId>,
}

impl TraceStep {
    /// The tree currently on top of the stack
    pub fn top(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }
}

/// Ordered record of stack snapshots, one per processed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildTrace {
    pub notation: Notation,
    steps: Vec<TraceStep>,
}

impl BuildTrace {
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a BuildTrace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Result of a successful build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub tree: ExpressionTree,
    pub trace: BuildTrace,
}

/// Assembles an expression tree from a postfix or prefix token stream
pub struct TreeBuilder {
    notation: Notation,
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    steps: Vec<TraceStep>,
}

impl TreeBuilder {
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            nodes: Vec::new(),
            stack: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Build a tree from a complete token sequence.
    ///
    /// Prefix input is scanned from the end, so each step of its trace
    /// refers to tokens in reverse order.
    pub fn build(tokens: &[Token], notation: Notation) -> Result<Build> {
        let mut builder = Self::new(notation);

        match notation {
            Notation::Postfix => {
                for (position, token) in tokens.iter().enumerate() {
                    builder.process(position, token)?;
                }
            }
            Notation::Prefix => {
                for (position, token) in tokens.iter().enumerate().rev() {
                    builder.process(position, token)?;
                }
            }
        }

        builder.finish()
    }

    /// Consume one token and record the resulting stack
    pub fn process(&mut self, position: usize, token: &Token) -> Result<NodeId> {
        let kind = match token {
            Token::Number(literal) => NodeKind::Operand {
                literal: literal.clone(),
            },
            Token::Operator(op) => {
                let (left, right) = self.pop_operands(*op, position)?;
                NodeKind::Operator {
                    op: *op,
                    left,
                    right,
                }
            }
            Token::LeftParen | Token::RightParen => {
                return Err(NotationError::UnexpectedParenthesis { position });
            }
        };

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node { id, kind });
        self.stack.push(id);

        trace!(%token, position, depth = self.stack.len(), "pushed node");
        self.steps.push(TraceStep {
            position,
            token: token.clone(),
            stack: self.stack.clone(),
        });

        Ok(id)
    }

    /// Pop two subtrees and return them as `(left, right)`
    fn pop_operands(&mut self, operator: Operator, position: usize) -> Result<(NodeId, NodeId)> {
        let available = self.stack.len();
        if available < 2 {
            return Err(NotationError::InsufficientOperands {
                operator,
                position,
                available,
            });
        }

        let top = self.stack.split_off(available - 2);
        let (below, above) = (top[0], top[1]);

        Ok(match self.notation {
            // right operand was pushed last
            Notation::Postfix => (below, above),
            // the reversed scan pushed the left operand last
            Notation::Prefix => (above, below),
        })
    }

    /// Finish the build; exactly one subtree must remain
    pub fn finish(mut self) -> Result<Build> {
        let root = match self.stack.len() {
            0 => return Err(NotationError::EmptyExpression),
            1 => self.stack.pop().ok_or(NotationError::EmptyExpression)?,
            count => return Err(NotationError::LeftoverOperands { count }),
        };

        debug!(
            notation = ?self.notation,
            nodes = self.nodes.len(),
            steps = self.steps.len(),
            "built expression tree"
        );

        Ok(Build {
            tree: ExpressionTree::new(self.nodes, root),
            trace: BuildTrace {
                notation: self.notation,
                steps: self.steps,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{infix_to_pn, infix_to_rpn, parse_tokens};

    #[test]
    fn test_postfix_build() {
        let tokens = infix_to_rpn("3+4*2").unwrap();
        let build = TreeBuilder::build(&tokens, Notation::Postfix).unwrap();

        let root = &build.tree[build.tree.root()];
        assert_eq!(root.label(), "+");
        let (left, right) = root.children().unwrap();
        assert_eq!(build.tree[left].label(), "3");
        assert_eq!(build.tree[right].label(), "*");
    }

    #[test]
    fn test_prefix_build_matches_postfix_shape() {
        let postfix = TreeBuilder::build(&infix_to_rpn("8-3-1").unwrap(), Notation::Postfix).unwrap();
        let prefix = TreeBuilder::build(&infix_to_pn("8-3-1").unwrap(), Notation::Prefix).unwrap();

        let labels = |build: &Build| -> Vec<String> {
            build
                .tree
                .preorder(build.tree.root())
                .into_iter()
                .map(|id| build.tree[id].label())
                .collect()
        };
        assert_eq!(labels(&postfix), ["-", "-", "8", "3", "1"]);
        assert_eq!(labels(&prefix), labels(&postfix));
    }

    #[test]
    fn test_trace_records_every_token() {
        let tokens = parse_tokens(&["3", "4", "+"]).unwrap();
        let build = TreeBuilder::build(&tokens, Notation::Postfix).unwrap();

        let sizes: Vec<usize> = build.trace.iter().map(|step| step.stack.len()).collect();
        assert_eq!(sizes, [1, 2, 1]);
        assert_eq!(build.trace.last().unwrap().stack, vec![build.tree.root()]);
    }

    #[test]
    fn test_snapshots_share_nodes() {
        let tokens = parse_tokens(&["3", "4", "+"]).unwrap();
        let build = TreeBuilder::build(&tokens, Notation::Postfix).unwrap();

        let steps = build.trace.steps();
        let (left, right) = build.tree[build.tree.root()].children().unwrap();
        assert_eq!(steps[1].stack, vec![left, right]);
    }

    #[test]
    fn test_prefix_trace_positions_run_backwards() {
        let tokens = parse_tokens(&["+", "3", "4"]).unwrap();
        let build = TreeBuilder::build(&tokens, Notation::Prefix).unwrap();

        let positions: Vec<usize> = build.trace.iter().map(|step| step.position).collect();
        assert_eq!(positions, [2, 1, 0]);
    }

    #[test]
    fn test_insufficient_operands() {
        let tokens = parse_tokens(&["3", "*"]).unwrap();
        assert_eq!(
            TreeBuilder::build(&tokens, Notation::Postfix),
            Err(NotationError::InsufficientOperands {
                operator: Operator::Mul,
                position: 1,
                available: 1,
            })
        );
    }

    #[test]
    fn test_leftover_operands() {
        let tokens = parse_tokens(&["3", "4"]).unwrap();
        assert_eq!(
            TreeBuilder::build(&tokens, Notation::Prefix),
            Err(NotationError::LeftoverOperands { count: 2 })
        );
    }

    #[test]
    fn test_empty_and_parenthesis() {
        assert_eq!(
            TreeBuilder::build(&[], Notation::Postfix),
            Err(NotationError::EmptyExpression)
        );
        let tokens = parse_tokens(&["(", "3"]).unwrap();
        assert_eq!(
            TreeBuilder::build(&tokens, Notation::Postfix),
            Err(NotationError::UnexpectedParenthesis { position: 0 })
        );
    }
}
