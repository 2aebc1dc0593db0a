mod block;
mod emphasis;
mod inline;
mod link;

use std::collections::HashSet;

use crate::{
    ast::{ASTNode, Document},
    token::{Token, TokenType},
    tokenizer::tokenize,
};

pub use self::block::MIN_FENCE_LEN;

/// How deep emphasis spans and link labels may nest. Markers past this depth
/// are plain text.
pub const MAX_NESTING: usize = 32;

/// A construct probe. Returns `None` when the construct does not match.
type Rule<'a> = fn(&mut Parser<'a>) -> Option<ASTNode>;

/// Recursive-descent parser over a token stream.
///
/// The parser owns a single cursor into the token slice. Every construct is
/// tried through [`Parser::speculate`], which puts the cursor back where it
/// was whenever the construct does not match, so the next candidate always
/// starts from the same place.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    // starts where a link failed or was refused for depth; they are text
    // from then on and never scanned twice
    failed_links: HashSet<usize>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            failed_links: HashSet::new(),
            depth: 0,
        }
    }

    pub fn reset(&mut self, tokens: &'a [Token]) {
        self.tokens = tokens;
        self.position = 0;
        self.failed_links.clear();
        self.depth = 0;
    }

    pub fn parse(&mut self) -> Document {
        let mut children = Vec::new();

        while self.peek_type() != TokenType::Eof {
            // blank lines
            if self.eat(TokenType::Newline) {
                continue;
            }

            let start = self.position;
            if let Some(block) = self.parse_block() {
                children.push(block);
            }
            if self.position == start {
                self.bump();
            }

            while self.eat(TokenType::Newline) {}
        }

        Document::new(children)
    }

    /// Runs `probe` and restores the cursor if it yields nothing.
    fn speculate<T>(&mut self, probe: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.position;
        let result = probe(self);
        if result.is_none() {
            self.position = saved;
        }

        result
    }

    /// Runs `body` one nesting level deeper, or yields `None` once
    /// [`MAX_NESTING`] is reached.
    fn nested<T>(&mut self, body: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_NESTING {
            return None;
        }

        self.depth += 1;
        let result = body(self);
        self.depth -= 1;

        result
    }

    /// First rule that matches wins. Each rule is tried from the same cursor.
    fn first_match(&mut self, rules: &[Rule<'a>]) -> Option<ASTNode> {
        rules.iter().find_map(|rule| self.speculate(*rule))
    }

    /// The current token, or `None` once the stream is exhausted.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens
            .get(self.position)
            .filter(|token| !token.is(TokenType::Eof))
    }

    fn peek_type(&self) -> TokenType {
        self.peek_type_at(0)
    }

    fn peek_type_at(&self, offset: usize) -> TokenType {
        self.tokens
            .get(self.position + offset)
            .map_or(TokenType::Eof, |token| token.token_type)
    }

    /// Consumes the current token. EOF is never consumed.
    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;

        Some(token)
    }

    fn eat(&mut self, token_type: TokenType) -> bool {
        if token_type != TokenType::Eof && self.peek_type() == token_type {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes a run of `token_type` and returns its length.
    fn eat_run(&mut self, token_type: TokenType) -> usize {
        let mut count = 0;
        while self.eat(token_type) {
            count += 1;
        }

        count
    }

    fn skip_whitespace(&mut self) {
        self.eat_run(TokenType::Whitespace);
    }

    /// Consumes everything up to, not including, the end of the line.
    fn skip_line(&mut self) {
        while !self.peek_type().is_line_end() {
            self.position += 1;
        }
    }

    /// True at the very start of input, or when the nearest preceding
    /// non-whitespace token is a newline.
    fn at_line_start(&self) -> bool {
        let end = self.position.min(self.tokens.len());
        self.tokens[..end]
            .iter()
            .rev()
            .find(|token| !token.is(TokenType::Whitespace))
            .map_or(true, |token| token.is(TokenType::Newline))
    }
}

pub fn parse(tokens: &[Token]) -> Document {
    Parser::new(tokens).parse()
}

pub fn parse_markdown(input: &str) -> Document {
    let tokens = tokenize(input);
    parse(&tokens)
}
