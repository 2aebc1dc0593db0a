use super::{inline::push_inline, Parser, Rule};
use crate::{
    ast::ASTNode,
    token::{HeadingLevel, TokenType},
};

pub const MIN_FENCE_LEN: usize = 3;

impl<'a> Parser<'a> {
    pub(super) fn parse_block(&mut self) -> Option<ASTNode> {
        self.skip_whitespace();
        if self.peek_type().is_line_end() {
            return None;
        }

        let rules: [Rule<'a>; 4] = [
            Self::parse_heading,
            Self::parse_code_block,
            Self::parse_blockquote,
            Self::parse_paragraph,
        ];
        self.first_match(&rules)
    }

    /// Inline content up to, not including, the end of the current line.
    pub(super) fn parse_inline_line(&mut self) -> Vec<ASTNode> {
        let mut children = Vec::new();
        while let Some(node) = self.parse_inline() {
            push_inline(&mut children, node);
        }

        children
    }

    fn parse_heading(&mut self) -> Option<ASTNode> {
        if !self.at_line_start() || self.peek_type() != TokenType::Hash {
            return None;
        }

        let markers = self.eat_run(TokenType::Hash);
        if !matches!(
            self.peek_type(),
            TokenType::Whitespace | TokenType::Newline | TokenType::Eof
        ) {
            return None;
        }
        self.skip_whitespace();

        Some(ASTNode::Heading {
            level: HeadingLevel::from_marker_len(markers),
            children: self.parse_inline_line(),
        })
    }

    fn parse_code_block(&mut self) -> Option<ASTNode> {
        if !self.at_line_start() || self.peek_type() != TokenType::Backtick {
            return None;
        }

        let fence = self.eat_run(TokenType::Backtick);
        if fence < MIN_FENCE_LEN {
            return None;
        }

        // info string
        self.skip_whitespace();
        let mut language = String::new();
        while !matches!(
            self.peek_type(),
            TokenType::Whitespace | TokenType::Newline | TokenType::Eof | TokenType::Backtick
        ) {
            language.push_str(&self.bump()?.raw);
        }
        // a backtick on the opening line makes this an inline code span instead
        while !self.peek_type().is_line_end() {
            if self.bump()?.is(TokenType::Backtick) {
                return None;
            }
        }
        self.eat(TokenType::Newline);

        let mut content = String::new();
        while let Some(token) = self.peek() {
            let closed = self.at_line_start()
                && self.speculate(|parser| parser.closing_fence(fence)).is_some();
            if closed {
                self.skip_line();
                break;
            }
            content.push_str(&token.raw);
            self.bump();
        }

        Some(ASTNode::CodeBlock {
            language: (!language.is_empty()).then_some(language),
            content,
        })
    }

    /// Optional indentation, then at least `fence` backticks.
    fn closing_fence(&mut self, fence: usize) -> Option<()> {
        self.skip_whitespace();
        (self.eat_run(TokenType::Backtick) >= fence).then_some(())
    }

    fn parse_blockquote(&mut self) -> Option<ASTNode> {
        if !self.at_line_start() || !self.eat(TokenType::GreaterThan) {
            return None;
        }
        self.skip_whitespace();

        let mut children = Vec::new();
        while !self.peek_type().is_line_end() {
            if let Some(block) = self.parse_block() {
                children.push(block);
            } else if let Some(node) = self.parse_inline() {
                push_inline(&mut children, node);
            } else {
                break;
            }
        }

        if children.is_empty() {
            children.push(ASTNode::Paragraph { children: vec![] });
        }

        Some(ASTNode::Blockquote { children })
    }

    fn parse_paragraph(&mut self) -> Option<ASTNode> {
        let children = self.parse_inline_line();
        if children.is_empty() {
            return None;
        }

        Some(ASTNode::Paragraph { children })
    }
}
