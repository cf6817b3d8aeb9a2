// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression input from streams and files

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Read one expression line, optionally printing a prompt first
pub fn read_expression<R: BufRead, W: Write>(input: &mut R, prompt: Option<(&str, &mut W)>) -> Result<String> {
    if let Some((text, out)) = prompt {
        writeln!(out, "{}", text).context("Failed to write prompt")?;
        out.flush().context("Failed to flush prompt")?;
    }

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read expression")?;
    if read == 0 {
        bail!("No expression given on standard input");
    }

    Ok(line.trim().to_string())
}

/// Parse an expression list: one per line, blank lines and `#` comments skipped.
/// Returns `(line number, expression)` pairs.
pub fn parse_expression_list(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, line.to_string()))
        .collect()
}

/// Read an expression list file
pub fn import_expression_file(path: &Path) -> Result<Vec<(usize, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read expression file: {}", path.display()))?;
    Ok(parse_expression_list(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_expression_trims() -> Result<()> {
        let mut input = Cursor::new("  3+4*2 \nignored\n");
        let mut prompt_out = Vec::new();
        let expression = read_expression(&mut input, Some(("Enter an expression:", &mut prompt_out)))?;

        assert_eq!(expression, "3+4*2");
        assert_eq!(String::from_utf8(prompt_out)?, "Enter an expression:\n");
        Ok(())
    }

    #[test]
    fn test_read_expression_eof() {
        let mut input = Cursor::new("");
        assert!(read_expression::<_, Vec<u8>>(&mut input, None).is_err());
    }

    #[test]
    fn test_import_expression_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "# scenarios")?;
        writeln!(file, "3+4*2")?;
        writeln!(file)?;
        writeln!(file, "  (3+4)*2  ")?;

        let expressions = import_expression_file(file.path())?;
        assert_eq!(
            expressions,
            vec![(2, "3+4*2".to_string()), (4, "(3+4)*2".to_string())]
        );
        Ok(())
    }
}
