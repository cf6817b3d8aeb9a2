// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tokenizer using pest

use super::token::{Literal, Operator, Token};
use crate::error::{NotationError, Result};
use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, trace};

#[derive(Parser)]
#[grammar = "notation/expr.pest"]
struct ExpressionLexer;

/// Token together with the byte offset it started at
#[derive(Debug, Clone)]
struct RawToken {
    token: Token,
    offset: usize,
}

/// Split an infix expression into tokens, folding unary minus into
/// the numeric literal that follows it
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let raw = lex(source)?;
    if raw.is_empty() {
        return Err(NotationError::EmptyExpression);
    }

    let tokens = fold_unary_minus(&raw)?;
    debug!(raw = raw.len(), tokens = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn lex(source: &str) -> Result<Vec<RawToken>> {
    let mut pairs = ExpressionLexer::parse(Rule::expression, source).map_err(|err| {
        let offset = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let fragment: String = source[offset..].chars().take(8).collect();
        NotationError::lex(offset, fragment, "unrecognized input")
    })?;

    let mut raw = Vec::new();
    let Some(expression) = pairs.next() else {
        return Ok(raw);
    };

    for pair in expression.into_inner() {
        let offset = pair.as_span().start();
        let token = match pair.as_rule() {
            Rule::number => Literal::parse(pair.as_str())
                .map(Token::Number)
                .ok_or_else(|| NotationError::lex(offset, pair.as_str(), "malformed number"))?,
            Rule::operator => pair
                .as_str()
                .chars()
                .next()
                .and_then(Operator::from_symbol)
                .map(Token::Operator)
                .ok_or_else(|| NotationError::lex(offset, pair.as_str(), "unknown operator"))?,
            Rule::lparen => Token::LeftParen,
            Rule::rparen => Token::RightParen,
            _ => continue,
        };
        raw.push(RawToken { token, offset });
    }

    Ok(raw)
}

/// A `-` is a sign when it opens the expression or follows an operator
/// or `(`. Only the previous raw token is consulted.
fn is_unary_minus(raw: &[RawToken], index: usize) -> bool {
    if raw[index].token != Token::Operator(Operator::Sub) {
        return false;
    }
    match index.checked_sub(1).map(|prev| &raw[prev].token) {
        None => true,
        Some(Token::Operator(_)) | Some(Token::LeftParen) => true,
        Some(_) => false,
    }
}

fn fold_unary_minus(raw: &[RawToken]) -> Result<Vec<Token>> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut index = 0;

    while index < raw.len() {
        let current = &raw[index];

        if is_unary_minus(raw, index) {
            match raw.get(index + 1) {
                Some(RawToken {
                    token: Token::Number(literal),
                    ..
                }) => {
                    let signed = literal.negated();
                    trace!(offset = current.offset, literal = %signed, "folded unary minus");
                    tokens.push(Token::Number(signed));
                    index += 2;
                    continue;
                }
                Some(next) => {
                    return Err(NotationError::lex(
                        next.offset,
                        next.token.to_string(),
                        "unary minus must be followed by a number",
                    ));
                }
                None => {
                    return Err(NotationError::lex(
                        current.offset,
                        "-",
                        "unary minus at end of expression",
                    ));
                }
            }
        }

        tokens.push(current.token.clone());
        index += 1;
    }

    Ok(tokens)
}
