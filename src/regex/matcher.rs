use crate::regex::ast::{Token, TokenKind};

fn matches_byte(token: &Token, byte: u8) -> bool {
    match token.kind {
        TokenKind::Literal => token.raw.as_bytes().first() == Some(&byte),
        TokenKind::Digit => byte.is_ascii_digit(),
        TokenKind::AlphaNumeric => byte.is_ascii_alphanumeric() || byte == b'_',
        TokenKind::Wildcard => true,
        TokenKind::PositiveGroup => token.members.iter().any(|m| matches_byte(m, byte)),
        TokenKind::NegativeGroup => !token.members.iter().any(|m| matches_byte(m, byte)),
        TokenKind::LineStart | TokenKind::LineEnd => false, // positional, handled by the matcher
    }
}

// Tries the token sequence at a fixed data position (locked mode): only
// token advancement and quantifier choices are explored from here.
fn match_here(tokens: &[Token], token_idx: usize, data: &[u8], data_idx: usize) -> bool {
    let Some(token) = tokens.get(token_idx) else {
        return true; // every token consumed; remaining input is fine
    };

    match token.kind {
        TokenKind::LineEnd if token_idx + 1 == tokens.len() => data_idx == data.len(),
        TokenKind::LineStart => data_idx == 0 && match_here(tokens, token_idx + 1, data, data_idx),
        _ if token.repeat => {
            // greedy: consume and stay on this token, then give back and
            // move on (zero occurrences land here too, even at end of input)
            if data.get(data_idx).is_some_and(|&b| matches_byte(token, b))
                && match_here(tokens, token_idx, data, data_idx + 1)
            {
                return true;
            }
            match_here(tokens, token_idx + 1, data, data_idx)
        }
        _ => {
            data.get(data_idx).is_some_and(|&b| matches_byte(token, b))
                && match_here(tokens, token_idx + 1, data, data_idx + 1)
        }
    }
}

/// Matches one compiled token sequence against the input. A leading `^`
/// locks the attempt to offset zero; otherwise every starting offset is
/// tried in order and the leftmost success wins.
///
/// Classic backtracking with no memoization: the worst case is exponential,
/// which is fine for short patterns over a single line but not for
/// pathological repeat-heavy patterns over long input.
pub fn match_tokens(data: &[u8], tokens: &[Token]) -> bool {
    if tokens.first().is_some_and(|t| t.kind == TokenKind::LineStart) {
        return match_here(tokens, 0, data, 0);
    }
    (0..=data.len()).any(|start| match_here(tokens, 0, data, start))
}
