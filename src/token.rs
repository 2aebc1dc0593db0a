use serde::Serialize;

pub const MAX_HEADING_LEVEL: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub raw: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, raw: impl Into<String>, position: Position) -> Self {
        Token {
            token_type,
            raw: raw.into(),
            position,
        }
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

/// Location of the first character of a token.
///
/// `line` and `column` are 1-based, `column` counts chars. `offset` is the
/// 0-based byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Text,
    Whitespace,
    Newline,
    Hash,
    Asterisk,
    Underscore,
    Backtick,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    Exclamation,
    GreaterThan,
    Minus,
    Plus,
    Dot,
    Tilde,
    LessThan,
    Backslash,
    Number,
    Eof,
}

impl TokenType {
    /// Tokens that end the inline content of a line.
    pub fn is_line_end(self) -> bool {
        matches!(self, TokenType::Newline | TokenType::Eof)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Level for a run of `len` hash markers. Runs longer than six are
    /// still heading markup and saturate at `H6`.
    pub fn from_marker_len(len: usize) -> Self {
        (len.clamp(1, MAX_HEADING_LEVEL) as u8).into()
    }

    pub fn as_u8(self) -> u8 {
        self.into()
    }
}

impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        match level {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}
