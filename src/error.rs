// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error taxonomy for tokenizing, converting and building expressions

use crate::notation::Operator;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotationError>;

/// Which side of a parenthesis pair was left without a partner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenthesis {
    Opening,
    Closing,
}

impl Parenthesis {
    /// The same parenthesis seen through a reversed, bracket-swapped stream
    pub fn mirrored(self) -> Self {
        match self {
            Parenthesis::Opening => Parenthesis::Closing,
            Parenthesis::Closing => Parenthesis::Opening,
        }
    }
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parenthesis::Opening => f.write_str("opening '('"),
            Parenthesis::Closing => f.write_str("closing ')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("lex error at offset {offset}: {message} (near {fragment:?})")]
    Lex {
        offset: usize,
        fragment: String,
        message: String,
    },

    #[error("expression is empty")]
    EmptyExpression,

    #[error("unbalanced parentheses: unmatched {0} parenthesis")]
    UnbalancedParentheses(Parenthesis),

    #[error("operator '{operator}' at position {position} needs two operands, found {available}")]
    InsufficientOperands {
        operator: Operator,
        position: usize,
        available: usize,
    },

    #[error("{count} operands left without an operator to combine them")]
    LeftoverOperands { count: usize },

    #[error("parenthesis at position {position} cannot appear in postfix or prefix notation")]
    UnexpectedParenthesis { position: usize },
}

impl NotationError {
    pub(crate) fn lex(offset: usize, fragment: impl Into<String>, message: impl Into<String>) -> Self {
        NotationError::Lex {
            offset,
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// Translate an error raised on a mirrored token stream back to the
    /// orientation of the source expression
    pub(crate) fn mirrored(self) -> Self {
        match self {
            NotationError::UnbalancedParentheses(paren) => {
                NotationError::UnbalancedParentheses(paren.mirrored())
            }
            other => other,
        }
    }
}
