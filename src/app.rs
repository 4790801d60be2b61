use std::io::{self, Read};

use anyhow::{Context, Result};
use bytes::Bytes;

use crate::cli::Config;
use crate::regex::match_line;

/// Reads one line from stdin, matches it, and echoes it on a match.
pub fn run(cfg: &Config) -> Result<bool> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("read input line")?;

    let line = trim_line_terminator(Bytes::from(buffer));
    let matched = match_line(&line, &cfg.pattern)
        .with_context(|| format!("malformed pattern `{}`", cfg.pattern))?;

    if matched {
        println!("{}", String::from_utf8_lossy(&line));
    }
    Ok(matched)
}

// The matcher compares `$` against the true end of the buffer, so exactly
// one trailing terminator must come off before matching.
fn trim_line_terminator(mut line: Bytes) -> Bytes {
    if line.last() == Some(&b'\n') {
        line.truncate(line.len() - 1);
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
    }
    line
}
