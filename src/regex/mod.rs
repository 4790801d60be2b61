pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;

pub use error::PatternError;
pub use matcher::match_tokens;
pub use parser::compile;

/// Matches one line against a pattern. True iff at least one alternation
/// branch matches; a pattern that fails to compile is an error, never a
/// silent "no match".
pub fn match_line(input: &[u8], pattern: &str) -> Result<bool, PatternError> {
    let sequences = compile(pattern)?;
    Ok(sequences.iter().any(|tokens| match_tokens(input, tokens)))
}
