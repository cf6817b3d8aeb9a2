// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Infix notation handling
//!
//! Tokenizes arithmetic expressions and converts them to postfix (RPN)
//! and prefix (PN) token sequences

mod evaluate;
mod lexer;
mod shunting;
mod token;

pub use evaluate::{eval_postfix, eval_prefix};
pub use lexer::tokenize;
pub use shunting::{infix_to_pn, infix_to_rpn, shunt, tokens_to_pn, tokens_to_rpn, Eviction};
pub use token::{parse_tokens, token_strings, Literal, Operator, Token};
