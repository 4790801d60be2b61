use thiserror::Error;

/// A pattern that fails to compile. Distinct from "no match", which is a
/// normal boolean outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("character class is missing its closing `]`")]
    UnclosedClass,
    #[error("group is missing its closing `)`")]
    UnclosedGroup,
    #[error("unmatched `)` outside any group")]
    UnmatchedGroupClose,
    #[error("`{0}` has no preceding token to repeat")]
    DanglingQuantifier(char),
    #[error("dangling `\\` at end of pattern")]
    TrailingEscape,
    #[error("unsupported escape `\\{0}`")]
    UnsupportedEscape(char),
}
