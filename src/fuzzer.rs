// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Random well-formed expression generation.
//! Each sample carries the value of the expression it spells, computed
//! directly from the generated structure.

use crate::notation::Operator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fuzzer configuration
#[derive(Debug, Clone)]
pub struct FuzzerConfig {
    pub count: usize,
    pub max_depth: usize,
    /// Chance that a literal carries a leading minus
    pub negative_probability: f64,
    /// Chance that a literal has a fractional part
    pub decimal_probability: f64,
    /// Chance of wrapping a subexpression in parentheses it does not need
    pub redundant_paren_probability: f64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        Self {
            count: 500,
            max_depth: 5,
            negative_probability: 0.2,
            decimal_probability: 0.2,
            redundant_paren_probability: 0.1,
        }
    }
}

/// A generated expression and its expected value
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub expression: String,
    pub expected: f64,
}

enum Generated {
    Literal {
        text: String,
        value: f64,
    },
    Binary {
        op: Operator,
        left: Box<Generated>,
        right: Box<Generated>,
    },
}

impl Generated {
    fn value(&self) -> f64 {
        match self {
            Generated::Literal { value, .. } => *value,
            Generated::Binary { op, left, right } => op.apply(left.value(), right.value()),
        }
    }

    /// Binding strength when written without parentheses
    fn precedence(&self) -> u8 {
        match self {
            Generated::Literal { .. } => u8::MAX,
            Generated::Binary { op, .. } => op.precedence(),
        }
    }
}

/// Generator for random infix expressions over `+ - * /`
pub struct Fuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl Fuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator, for reproducible tests
    pub fn with_seed(config: FuzzerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `config.count` samples
    pub fn samples(&mut self) -> Vec<Sample> {
        (0..self.config.count).map(|_| self.sample()).collect()
    }

    pub fn sample(&mut self) -> Sample {
        let generated = self.generate(0);
        let mut expression = String::new();
        self.write(&generated, &mut expression);

        Sample {
            expression,
            expected: generated.value(),
        }
    }

    fn generate(&mut self, depth: usize) -> Generated {
        if depth >= self.config.max_depth || self.rng.gen_bool(0.3) {
            return self.generate_literal();
        }

        let op = match self.rng.gen_range(0..4) {
            0 => Operator::Add,
            1 => Operator::Sub,
            2 => Operator::Mul,
            _ => Operator::Div,
        };

        Generated::Binary {
            op,
            left: Box::new(self.generate(depth + 1)),
            right: Box::new(self.generate(depth + 1)),
        }
    }

    fn generate_literal(&mut self) -> Generated {
        let mut text = self.rng.gen_range(1..100).to_string();
        if self.rng.gen_bool(self.config.decimal_probability) {
            text.push_str(&format!(".{}", self.rng.gen_range(0..100)));
        }
        if self.rng.gen_bool(self.config.negative_probability) {
            text.insert(0, '-');
        }

        let value = text.parse().unwrap_or_default();
        Generated::Literal { text, value }
    }

    /// Spell the expression with the parentheses left-to-right grouping
    /// needs, plus occasional redundant ones
    fn write(&mut self, generated: &Generated, out: &mut String) {
        match generated {
            Generated::Literal { text, .. } => out.push_str(text),
            Generated::Binary { op, left, right } => {
                let left_parens = left.precedence() < op.precedence();
                let right_parens = right.precedence() <= op.precedence();

                self.write_operand(left, left_parens, out);
                out.push(op.symbol());
                self.write_operand(right, right_parens, out);
            }
        }
    }

    fn write_operand(&mut self, operand: &Generated, required: bool, out: &mut String) {
        let parens = required || self.rng.gen_bool(self.config.redundant_paren_probability);
        if parens {
            out.push('(');
        }
        self.write(operand, out);
        if parens {
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_fuzzer_is_deterministic() {
        let config = FuzzerConfig {
            count: 20,
            ..FuzzerConfig::default()
        };
        let a = Fuzzer::with_seed(config.clone(), 7).samples();
        let b = Fuzzer::with_seed(config, 7).samples();
        assert_eq!(a, b);
    }

    #[test]
    fn test_samples_use_only_expression_characters() {
        let mut fuzzer = Fuzzer::with_seed(FuzzerConfig::default(), 11);
        for sample in fuzzer.samples() {
            assert!(sample
                .expression
                .chars()
                .all(|c| c.is_ascii_digit() || "+-*/().".contains(c)));
        }
    }

    #[test]
    fn test_depth_zero_yields_literals() {
        let config = FuzzerConfig {
            max_depth: 0,
            negative_probability: 0.0,
            decimal_probability: 0.0,
            ..FuzzerConfig::default()
        };
        let sample = Fuzzer::with_seed(config, 3).sample();
        assert!(sample.expression.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(sample.expression.parse::<f64>().unwrap(), sample.expected);
    }
}
