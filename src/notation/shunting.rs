// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shunting-yard conversion to postfix and prefix notation

use super::lexer::tokenize;
use super::token::{Operator, Token};
use crate::error::{NotationError, Parenthesis, Result};
use tracing::{debug, trace};

/// When an incoming operator pops the operator on top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eviction {
    /// Pop while `top >= incoming`; left-to-right grouping for postfix
    AtLeast,
    /// Pop while `top > incoming`; used on the reversed stream for prefix
    Greater,
}

impl Eviction {
    fn evicts(self, top: Operator, incoming: Operator) -> bool {
        match self {
            Eviction::AtLeast => top.precedence() >= incoming.precedence(),
            Eviction::Greater => top.precedence() > incoming.precedence(),
        }
    }
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Paren,
}

/// Run shunting-yard over an infix token stream
pub fn shunt(tokens: &[Token], eviction: Eviction) -> Result<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::LeftParen => operators.push(Pending::Paren),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::Paren) => break,
                    None => return Err(NotationError::UnbalancedParentheses(Parenthesis::Closing)),
                }
            },
            Token::Operator(incoming) => {
                while let Some(&Pending::Operator(top)) = operators.last() {
                    if !eviction.evicts(top, *incoming) {
                        break;
                    }
                    trace!(%top, %incoming, "evicting operator");
                    operators.pop();
                    output.push(Token::Operator(top));
                }
                operators.push(Pending::Operator(*incoming));
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Paren => return Err(NotationError::UnbalancedParentheses(Parenthesis::Opening)),
        }
    }

    Ok(output)
}

/// Convert infix tokens to Reverse Polish (postfix) notation
pub fn tokens_to_rpn(tokens: &[Token]) -> Result<Vec<Token>> {
    let output = shunt(tokens, Eviction::AtLeast)?;
    debug!(input = tokens.len(), output = output.len(), "converted to RPN");
    Ok(output)
}

/// Convert infix tokens to Polish (prefix) notation.
///
/// The stream is reversed with its brackets swapped, run through
/// shunting-yard with the strict tie-break, and the output reversed.
/// Reversal flips apparent associativity, so equal precedence must not
/// evict here or chains like `8-3-1` come out grouped to the right.
pub fn tokens_to_pn(tokens: &[Token]) -> Result<Vec<Token>> {
    let mirrored: Vec<Token> = tokens.iter().rev().map(Token::mirrored).collect();

    let mut output = shunt(&mirrored, Eviction::Greater).map_err(NotationError::mirrored)?;
    output.reverse();

    debug!(input = tokens.len(), output = output.len(), "converted to PN");
    Ok(output)
}

/// Tokenize and convert an infix expression to RPN
pub fn infix_to_rpn(expression: &str) -> Result<Vec<Token>> {
    tokens_to_rpn(&tokenize(expression)?)
}

/// Tokenize and convert an infix expression to PN
pub fn infix_to_pn(expression: &str) -> Result<Vec<Token>> {
    tokens_to_pn(&tokenize(expression)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::token_strings;

    fn rpn(expression: &str) -> Vec<String> {
        token_strings(&infix_to_rpn(expression).unwrap())
    }

    fn pn(expression: &str) -> Vec<String> {
        token_strings(&infix_to_pn(expression).unwrap())
    }

    #[test]
    fn test_rpn_precedence() {
        assert_eq!(rpn("3+4*2"), ["3", "4", "2", "*", "+"]);
        assert_eq!(rpn("(3+4)*2"), ["3", "4", "+", "2", "*"]);
    }

    #[test]
    fn test_rpn_left_grouping() {
        assert_eq!(rpn("8-3-1"), ["8", "3", "-", "1", "-"]);
        assert_eq!(rpn("8/4*2"), ["8", "4", "/", "2", "*"]);
    }

    #[test]
    fn test_pn_precedence() {
        assert_eq!(pn("3+4*2"), ["+", "3", "*", "4", "2"]);
        assert_eq!(pn("(3+4)*2"), ["*", "+", "3", "4", "2"]);
    }

    #[test]
    fn test_pn_keeps_left_grouping_for_equal_precedence() {
        assert_eq!(pn("8-3-1"), ["-", "-", "8", "3", "1"]);
        assert_eq!(pn("8/4*2"), ["*", "/", "8", "4", "2"]);
    }

    #[test]
    fn test_non_strict_eviction_on_reversed_stream_groups_right() {
        let tokens = tokenize("8-3-1").unwrap();
        let mirrored: Vec<Token> = tokens.iter().rev().map(Token::mirrored).collect();
        let mut output = shunt(&mirrored, Eviction::AtLeast).unwrap();
        output.reverse();
        // 8 - (3 - 1)
        assert_eq!(token_strings(&output), ["-", "8", "-", "3", "1"]);
    }

    #[test]
    fn test_parentheses_never_reach_output() {
        for expression in ["((1))", "(1+(2*3))/(4-5)"] {
            assert!(infix_to_rpn(expression).unwrap().iter().all(|t| !t.is_parenthesis()));
            assert!(infix_to_pn(expression).unwrap().iter().all(|t| !t.is_parenthesis()));
        }
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let closing = Err(NotationError::UnbalancedParentheses(Parenthesis::Closing));
        let opening = Err(NotationError::UnbalancedParentheses(Parenthesis::Opening));

        assert_eq!(infix_to_rpn("(3+4"), opening);
        assert_eq!(infix_to_rpn("3+4)"), closing);
        assert_eq!(infix_to_pn("(3+4"), opening);
        assert_eq!(infix_to_pn("3+4)"), closing);
    }
}
