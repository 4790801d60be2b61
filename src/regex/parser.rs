use crate::regex::ast::{Token, TokenKind};
use crate::regex::error::PatternError;

/// Compiles a pattern into one token sequence per alternation branch.
///
/// Expansion errors abort the whole compilation. A branch that fails to
/// tokenize is dropped as long as at least one branch compiles; if every
/// branch is malformed the first error is returned.
pub fn compile(pattern: &str) -> Result<Vec<Vec<Token>>, PatternError> {
    let mut sequences = Vec::new();
    let mut first_error = None;

    for variant in expand_alternation(pattern)? {
        match tokenize(&variant) {
            Ok(tokens) => sequences.push(tokens),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) if sequences.is_empty() => Err(err),
        _ => Ok(sequences),
    }
}

/// Rewrites `(a|b|c)` groups into the cross product of flat pattern
/// strings, preserving the surrounding text. Grouping is one level only;
/// the first `)` closes the group.
pub fn expand_alternation(pattern: &str) -> Result<Vec<String>, PatternError> {
    let mut variants = vec![String::new()];
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '(' => {
                let mut body = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ')' {
                        closed = true;
                        break;
                    }
                    body.push(inner);
                }
                if !closed {
                    return Err(PatternError::UnclosedGroup);
                }

                let branches: Vec<&str> = body.split('|').collect();
                variants = variants
                    .iter()
                    .flat_map(|head| branches.iter().map(move |branch| format!("{head}{branch}")))
                    .collect();
            }
            ')' => return Err(PatternError::UnmatchedGroupClose),
            _ => {
                for variant in &mut variants {
                    variant.push(c);
                }
            }
        }
    }
    Ok(variants)
}

/// Converts one flat (alternation-free) pattern into a token sequence.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((at, c)) = chars.next() {
        match c {
            '^' if at == 0 => tokens.push(Token::new(TokenKind::LineStart, "^")),
            '$' if chars.peek().is_none() => tokens.push(Token::new(TokenKind::LineEnd, "$")),
            '.' => tokens.push(Token::new(TokenKind::Wildcard, ".")),
            '\\' => match chars.next() {
                Some((_, 'd')) => tokens.push(Token::new(TokenKind::Digit, r"\d")),
                Some((_, 'w')) => tokens.push(Token::new(TokenKind::AlphaNumeric, r"\w")),
                Some((_, other)) => return Err(PatternError::UnsupportedEscape(other)),
                None => return Err(PatternError::TrailingEscape),
            },
            '[' => {
                let mut negated = false;
                if let Some((_, '^')) = chars.peek() {
                    negated = true;
                    chars.next();
                }
                let mut members = Vec::new();
                let mut close = None;
                for (i, member) in chars.by_ref() {
                    if member == ']' {
                        close = Some(i);
                        break;
                    }
                    members.push(Token::literal(member));
                }
                let Some(close) = close else {
                    return Err(PatternError::UnclosedClass);
                };
                tokens.push(Token::group(&pattern[at..=close], members, negated));
            }
            '+' => {
                let Some(last) = tokens.last() else {
                    return Err(PatternError::DanglingQuantifier('+'));
                };
                // one mandatory copy stays as-is, one zero-or-more copy follows
                let mut tail = last.clone();
                tail.repeat = true;
                tokens.push(tail);
            }
            '?' | '*' => {
                let Some(last) = tokens.last_mut() else {
                    return Err(PatternError::DanglingQuantifier(c));
                };
                last.repeat = true;
            }
            other => tokens.push(Token::literal(other)),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_single_group_into_branches() {
        assert_eq!(
            expand_alternation("(cat|dog)").unwrap(),
            vec!["cat".to_string(), "dog".to_string()]
        );
        assert_eq!(expand_alternation("abc").unwrap(), vec!["abc".to_string()]);
    }

    #[test]
    fn expands_groups_as_cross_product() {
        assert_eq!(
            expand_alternation("a(b|c)d(e|f)").unwrap(),
            vec![
                "abde".to_string(),
                "abdf".to_string(),
                "acde".to_string(),
                "acdf".to_string()
            ]
        );
    }

    #[test]
    fn unbalanced_groups_are_rejected() {
        assert_eq!(expand_alternation("(ab"), Err(PatternError::UnclosedGroup));
        assert_eq!(
            expand_alternation("ab)"),
            Err(PatternError::UnmatchedGroupClose)
        );
    }

    #[test]
    fn plus_compiles_to_mandatory_and_repeating_copy() {
        let tokens = tokenize("a+").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(!tokens[0].repeat);
        assert!(tokens[1].repeat);
        assert_eq!(tokens[0].kind, tokens[1].kind);
        assert_eq!(tokens[0].raw, tokens[1].raw);
    }

    #[test]
    fn question_and_star_flag_the_previous_token_in_place() {
        for pattern in ["a?", "a*"] {
            let tokens = tokenize(pattern).unwrap();
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].repeat);
        }
    }

    #[test]
    fn anchors_only_bind_at_the_edges() {
        let tokens = tokenize("^a$").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::LineStart);
        assert_eq!(tokens[2].kind, TokenKind::LineEnd);

        let tokens = tokenize("a^b$c").unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Literal));
    }

    #[test]
    fn classes_collect_literal_members() {
        let tokens = tokenize("[abc]").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::PositiveGroup);
        assert_eq!(tokens[0].raw, "[abc]");
        assert_eq!(tokens[0].members.len(), 3);

        let tokens = tokenize("[^xy]").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::NegativeGroup);
        assert_eq!(tokens[0].raw, "[^xy]");
        assert_eq!(tokens[0].members.len(), 2);
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        assert_eq!(tokenize("[abc"), Err(PatternError::UnclosedClass));
        assert_eq!(tokenize("+a"), Err(PatternError::DanglingQuantifier('+')));
        assert_eq!(tokenize("?a"), Err(PatternError::DanglingQuantifier('?')));
        assert_eq!(tokenize("ab\\"), Err(PatternError::TrailingEscape));
        assert_eq!(tokenize(r"a\q"), Err(PatternError::UnsupportedEscape('q')));
    }

    #[test]
    fn compile_keeps_valid_branches_when_one_is_malformed() {
        let sequences = compile("(a|[b)").unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0][0].raw, "a");

        assert_eq!(compile("([a|[b)"), Err(PatternError::UnclosedClass));
    }
}
