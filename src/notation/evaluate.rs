// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stack evaluators for postfix and prefix token sequences

use super::token::Token;
use crate::error::{NotationError, Result};

/// Evaluate a postfix sequence left to right
pub fn eval_postfix(tokens: &[Token]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(literal) => stack.push(literal.value()),
            Token::Operator(op) => {
                let (rhs, lhs) = pop_pair(&mut stack, *op, position)?;
                stack.push(op.apply(lhs, rhs));
            }
            Token::LeftParen | Token::RightParen => {
                return Err(NotationError::UnexpectedParenthesis { position });
            }
        }
    }

    finish(stack)
}

/// Evaluate a prefix sequence by scanning it right to left
pub fn eval_prefix(tokens: &[Token]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for (position, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::Number(literal) => stack.push(literal.value()),
            Token::Operator(op) => {
                let (lhs, rhs) = pop_pair(&mut stack, *op, position)?;
                stack.push(op.apply(lhs, rhs));
            }
            Token::LeftParen | Token::RightParen => {
                return Err(NotationError::UnexpectedParenthesis { position });
            }
        }
    }

    finish(stack)
}

/// Pop the two topmost values, top first
fn pop_pair(stack: &mut Vec<f64>, operator: super::Operator, position: usize) -> Result<(f64, f64)> {
    if stack.len() < 2 {
        return Err(NotationError::InsufficientOperands {
            operator,
            position,
            available: stack.len(),
        });
    }
    let first = stack.pop().unwrap_or_default();
    let second = stack.pop().unwrap_or_default();
    Ok((first, second))
}

fn finish(mut stack: Vec<f64>) -> Result<f64> {
    match stack.len() {
        0 => Err(NotationError::EmptyExpression),
        1 => Ok(stack.pop().unwrap_or_default()),
        count => Err(NotationError::LeftoverOperands { count }),
    }
}
