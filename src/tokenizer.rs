mod cursor;

use self::cursor::Cursor;
use crate::{
    token::{Token, TokenType},
    util::{is_text, is_whitespace, sigil_type},
};

/// Splits markdown source into a flat stream of positioned tokens.
///
/// The tokenizer only classifies characters. Sigils are always emitted one
/// per character, so deciding what `**` or ` ``` ` means is left to the parser.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            cursor: Cursor::new(input),
        }
    }

    pub fn reset(&mut self, input: &'a str) {
        self.cursor = Cursor::new(input);
    }

    /// Consumes the remaining input. The returned stream always ends with
    /// exactly one EOF token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        while let Some(char) = self.cursor.peek() {
            let position = self.cursor.position();

            if char == '\n' {
                self.cursor.bump();
                tokens.push(Token::new(TokenType::Newline, "\n", position));
            } else if is_whitespace(char) {
                let raw = self.cursor.eat_while(is_whitespace);
                tokens.push(Token::new(TokenType::Whitespace, raw, position));
            } else if let Some(token_type) = sigil_type(char) {
                self.cursor.bump();
                tokens.push(Token::new(token_type, char.to_string(), position));
            } else if char.is_ascii_digit() {
                let raw = self.cursor.eat_while(|c| c.is_ascii_digit());
                tokens.push(Token::new(TokenType::Number, raw, position));
            } else {
                let raw = self.cursor.eat_while(is_text);
                if raw.is_empty() {
                    // forward-progress guard: `is_text` takes every char the
                    // arms above do not, so a run is never empty today
                    self.cursor.bump();
                } else {
                    tokens.push(Token::new(TokenType::Text, raw, position));
                }
            }
        }

        tokens.push(Token::new(TokenType::Eof, "", self.cursor.position()));

        tokens
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize()
}
