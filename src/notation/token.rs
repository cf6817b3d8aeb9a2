// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Token definitions

use crate::error::{NotationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Fixed precedence table: `+ -` bind looser than `* /`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Numeric literal, kept with its exact source spelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Literal {
    text: String,
    value: f64,
}

impl Literal {
    /// Parse an optionally signed decimal literal such as `3`, `-3` or `2.50`
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('-').unwrap_or(text);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };

        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !fraction.map_or(true, is_digits) {
            return None;
        }

        let value = text.parse().ok()?;
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Fold a unary minus into this literal
    pub fn negated(&self) -> Self {
        match self.text.strip_prefix('-') {
            Some(unsigned) => Self {
                text: unsigned.to_string(),
                value: -self.value,
            },
            None => Self {
                text: format!("-{}", self.text),
                value: -self.value,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.text
    }
}

impl TryFrom<String> for Literal {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self> {
        Literal::parse(&value).ok_or_else(|| NotationError::lex(0, value, "not a number"))
    }
}

/// A single lexical unit of an arithmetic expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Token {
    Number(Literal),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub fn number(text: &str) -> Option<Self> {
        Literal::parse(text).map(Token::Number)
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParen | Token::RightParen)
    }

    /// Swap `(` and `)`; every other token is returned unchanged
    pub fn mirrored(&self) -> Self {
        match self {
            Token::LeftParen => Token::RightParen,
            Token::RightParen => Token::LeftParen,
            other => other.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => write!(f, "{}", literal),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

impl FromStr for Token {
    type Err = NotationError;

    /// Classify one token string, e.g. an element of a printed RPN list
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            match c {
                '(' => return Ok(Token::LeftParen),
                ')' => return Ok(Token::RightParen),
                _ => {
                    if let Some(op) = Operator::from_symbol(c) {
                        return Ok(Token::Operator(op));
                    }
                }
            }
        }

        Token::number(s).ok_or_else(|| NotationError::lex(0, s, "not a number, operator or parenthesis"))
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for Token {
    type Error = NotationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Render a token sequence as its list of source strings
pub fn token_strings(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

/// Parse a list of token strings back into tokens
pub fn parse_tokens<S: AsRef<str>>(items: &[S]) -> Result<Vec<Token>> {
    items.iter().map(|item| item.as_ref().parse()).collect()
}
