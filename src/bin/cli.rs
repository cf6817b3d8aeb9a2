// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Notation Tree CLI

use anyhow::Result;
use clap::Parser;
use notation_tree::cli::{Reporter, Runner};
use notation_tree::{io, Config};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notation-tree")]
#[command(about = "Convert infix expressions to RPN and PN and animate the expression tree builds", long_about = None)]
struct Cli {
    /// Expression to convert (read from standard input when omitted)
    #[arg(short, long, value_name = "EXPR", conflicts_with = "file")]
    expr: Option<String>,

    /// Convert every expression in a file, one per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Configuration file (defaults to ./notation.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Delay between animation frames in milliseconds
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Skip the terminal animation
    #[arg(long)]
    no_animate: bool,

    /// Write every frame as SVG into this directory
    #[arg(long, value_name = "DIR")]
    frames_dir: Option<PathBuf>,

    /// Write both build traces as JSON to this file
    #[arg(long, value_name = "FILE")]
    trace_json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags take precedence over file and environment settings
    fn apply(&self, config: &mut Config) {
        if let Some(interval) = self.interval_ms {
            config.interval_ms = interval;
        }
        if self.no_animate {
            config.animate = false;
        }
        if let Some(dir) = &self.frames_dir {
            config.frames_dir = Some(dir.clone());
        }
        if let Some(path) = &self.trace_json {
            config.trace_json = Some(path.clone());
        }
        if self.expr.is_some() {
            config.prompt = false;
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if let Some(file) = &cli.file {
        batch_command(file, config)?;
        return Ok(());
    }

    let expression = match &cli.expr {
        Some(expression) => expression.clone(),
        None => read_stdin(config.prompt)?,
    };

    let runner = Runner::new(config);
    if let Err(e) = runner.run(&expression) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin(prompt: bool) -> Result<String> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    if prompt {
        let mut stdout = std::io::stdout();
        io::read_expression(&mut input, Some(("Enter an expression:", &mut stdout)))
    } else {
        io::read_expression::<_, std::io::Stdout>(&mut input, None)
    }
}

fn batch_command(file: &Path, config: Config) -> Result<()> {
    let expressions = io::import_expression_file(file)?;
    if expressions.is_empty() {
        Reporter::report_info(&format!("No expressions found in {}", file.display()));
        return Ok(());
    }

    let summary = Runner::new(config).run_batch(&expressions);
    Reporter::report_summary(summary.converted, summary.failed);

    if summary.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
