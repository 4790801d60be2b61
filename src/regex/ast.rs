#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal,
    Digit,         // \d
    AlphaNumeric,  // \w
    LineStart,     // ^
    LineEnd,       // $
    Wildcard,      // .
    PositiveGroup, // [abc]
    NegativeGroup, // [^abc]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,         // pattern substring this token came from
    pub members: Vec<Token>, // literal sub-tokens, group kinds only
    pub repeat: bool,        // zero-or-more, from `?`/`*` or synthesized by `+`
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Token {
            kind,
            raw: raw.into(),
            members: Vec::new(),
            repeat: false,
        }
    }

    pub fn literal(c: char) -> Self {
        Token::new(TokenKind::Literal, c.to_string())
    }

    pub fn group(raw: impl Into<String>, members: Vec<Token>, negated: bool) -> Self {
        let kind = if negated {
            TokenKind::NegativeGroup
        } else {
            TokenKind::PositiveGroup
        };
        Token {
            kind,
            raw: raw.into(),
            members,
            repeat: false,
        }
    }
}
