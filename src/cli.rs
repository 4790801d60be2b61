use anyhow::{Context, Result};

pub const USAGE: &str = "usage: linegrep -E <pattern>";

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
}

pub fn parse_args(args: &[String]) -> Result<Config> {
    let pattern_idx = args.iter().position(|a| a == "-E").context(USAGE)? + 1;
    let pattern = args.get(pattern_idx).context(USAGE)?.clone();
    Ok(Config { pattern })
}
