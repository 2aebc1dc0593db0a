use crate::token::TokenType;

pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Single-character markdown sigils. Each one is always its own token.
pub(crate) fn sigil_type(c: char) -> Option<TokenType> {
    let token_type = match c {
        '#' => TokenType::Hash,
        '*' => TokenType::Asterisk,
        '_' => TokenType::Underscore,
        '`' => TokenType::Backtick,
        '[' => TokenType::LeftBracket,
        ']' => TokenType::RightBracket,
        '(' => TokenType::LeftParen,
        ')' => TokenType::RightParen,
        '!' => TokenType::Exclamation,
        '>' => TokenType::GreaterThan,
        '-' => TokenType::Minus,
        '+' => TokenType::Plus,
        '.' => TokenType::Dot,
        '~' => TokenType::Tilde,
        '<' => TokenType::LessThan,
        '\\' => TokenType::Backslash,
        _ => return None,
    };

    Some(token_type)
}

pub(crate) fn is_sigil(c: char) -> bool {
    sigil_type(c).is_some()
}

/// Characters that can continue a TEXT run.
pub(crate) fn is_text(c: char) -> bool {
    c != '\n' && !is_whitespace(c) && !is_sigil(c)
}
