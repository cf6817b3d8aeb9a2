// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Notation Tree
//!
//! Converts arithmetic infix expressions to Reverse Polish (postfix) and
//! Polish (prefix) notation, builds an expression tree from each sequence
//! and records every stack state of the build so it can be animated.

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod fuzzer;
pub mod io;
pub mod notation;
pub mod render;

pub use ast::{Build, BuildTrace, ExpressionTree, Node, NodeId, NodeKind, Notation, TraceStep, TreeBuilder};
pub use config::Config;
pub use error::{NotationError, Parenthesis, Result};
pub use notation::{infix_to_pn, infix_to_rpn, tokenize, Operator, Token};

/// Everything derived from one infix expression
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub expression: String,
    /// Tokens after unary-minus folding
    pub tokens: Vec<Token>,
    pub rpn: Vec<Token>,
    pub pn: Vec<Token>,
    pub rpn_build: Build,
    pub pn_build: Build,
}

/// Main entry point: tokenize, convert both ways and build both trees
pub fn convert(expression: &str) -> Result<Conversion> {
    let tokens = tokenize(expression)?;
    let rpn = notation::tokens_to_rpn(&tokens)?;
    let pn = notation::tokens_to_pn(&tokens)?;

    let rpn_build = TreeBuilder::build(&rpn, Notation::Postfix)?;
    let pn_build = TreeBuilder::build(&pn, Notation::Prefix)?;

    Ok(Conversion {
        expression: expression.to_string(),
        tokens,
        rpn,
        pn,
        rpn_build,
        pn_build,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_builds_independent_trees() {
        let conversion = convert("2*(3+4)-5").unwrap();
        assert_eq!(conversion.rpn_build.tree.evaluate(), 9.0);
        assert_eq!(conversion.pn_build.tree.evaluate(), 9.0);
        assert_eq!(conversion.rpn_build.trace.len(), conversion.rpn.len());
        assert_eq!(conversion.pn_build.trace.len(), conversion.pn.len());
    }

    #[test]
    fn test_convert_propagates_errors() {
        assert_eq!(
            convert("(1+2"),
            Err(NotationError::UnbalancedParentheses(Parenthesis::Opening))
        );
    }
}
