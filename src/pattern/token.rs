use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Colon,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl TokenKind {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b':' => Some(Self::Colon),
            b'{' => Some(Self::OpenBrace),
            b'}' => Some(Self::CloseBrace),
            b'[' => Some(Self::OpenBracket),
            b']' => Some(Self::CloseBracket),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Colon => ":",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.text, self.kind.as_str())
    }
}

/// Splits a pattern into tokens.
///
/// Each of `{`, `}`, `[`, `]` and `:` is a token of its own; every run of
/// other bytes is a single [`TokenKind::String`] token. Never fails.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, &b) in pattern.as_bytes().iter().enumerate() {
        if let Some(kind) = TokenKind::from_byte(b) {
            // delimiters are ASCII, so both cuts are char boundaries
            if start < i {
                tokens.push(Token {
                    kind: TokenKind::String,
                    text: &pattern[start..i],
                });
            }
            tokens.push(Token {
                kind,
                text: &pattern[i..=i],
            });
            start = i + 1;
        }
    }

    if start < pattern.len() {
        tokens.push(Token {
            kind: TokenKind::String,
            text: &pattern[start..],
        });
    }

    tokens
}
