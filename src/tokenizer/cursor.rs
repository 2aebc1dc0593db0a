use std::{iter::Peekable, str::Chars};

use crate::token::Position;

/// Char cursor over the source that keeps `Position` in step with every
/// consumed character.
pub(super) struct Cursor<'a> {
    input: &'a str,
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub(super) fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    pub(super) fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consumes the longest run of chars matching `predicate` and returns it
    /// as a slice of the source.
    pub(super) fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset;
        while self.peek().map(&predicate) == Some(true) {
            self.bump();
        }

        &self.input[start..self.offset]
    }
}
