// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::ast::Build;
use crate::notation::{token_strings, Token};
use crate::Conversion;
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// `LABEL: ["3", "4", "+"]`
    pub fn sequence_line(label: &str, tokens: &[Token]) -> String {
        format!("{}: {:?}", label, token_strings(tokens))
    }

    /// Both sequences, one per line, kept above the animation frames
    pub fn sequences_header(conversion: &Conversion) -> String {
        format!(
            "{}\n{}",
            Self::sequence_line("RPN", &conversion.rpn),
            Self::sequence_line("PN", &conversion.pn)
        )
    }

    /// Parenthesized infix form and value of a built tree
    pub fn tree_line(build: &Build) -> String {
        let tree = &build.tree;
        format!("{} = {}", tree.to_infix(tree.root()), format_value(tree.evaluate()))
    }

    /// Report both sequences and the trees built from them
    pub fn report_conversion(conversion: &Conversion) {
        println!("{}", Self::sequence_line("RPN", &conversion.rpn).cyan());
        println!("{}", Self::sequence_line("PN", &conversion.pn).cyan());
        println!(
            "  {} {}",
            "RPN tree:".bright_black(),
            Self::tree_line(&conversion.rpn_build)
        );
        println!(
            "  {} {}",
            "PN tree: ".bright_black(),
            Self::tree_line(&conversion.pn_build)
        );
    }

    /// Report one entry of an expression list
    pub fn report_batch_entry(line: usize, expression: &str, conversion: &Conversion) {
        println!("{} {}", format!("[{}]", line).bright_black(), expression.bold());
        println!("  {}", Self::sequence_line("RPN", &conversion.rpn));
        println!("  {}", Self::sequence_line("PN", &conversion.pn));
        println!("  {}", Self::tree_line(&conversion.rpn_build).green());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ".bright_blue(), message);
    }

    /// Print batch totals
    pub fn report_summary(converted: usize, failed: usize) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!(
            "  {} {}   {} {}",
            "Converted:".bright_black(),
            converted.to_string().green(),
            "Failed:".bright_black(),
            if failed > 0 {
                failed.to_string().red()
            } else {
                failed.to_string().green()
            }
        );
        println!("{}", "━".repeat(60).bright_black());
    }
}

/// Print integral values without a fractional part
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
