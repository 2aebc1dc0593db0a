use super::{Parser, Rule};
use crate::{ast::ASTNode, token::TokenType};

/// Appends `node`, folding it into a preceding text node when both are text.
pub(super) fn push_inline(children: &mut Vec<ASTNode>, node: ASTNode) {
    if let (Some(ASTNode::Text { content: last }), ASTNode::Text { content }) =
        (children.last_mut(), &node)
    {
        last.push_str(content);
        return;
    }

    children.push(node);
}

impl<'a> Parser<'a> {
    /// One inline node, or `None` at the end of the line.
    pub(super) fn parse_inline(&mut self) -> Option<ASTNode> {
        if self.peek_type().is_line_end() {
            return None;
        }

        let rules: [Rule<'a>; 3] = [
            Self::parse_inline_code,
            Self::parse_link,
            Self::parse_emphasis,
        ];
        self.first_match(&rules)
            .or_else(|| self.bump().map(|token| ASTNode::text(token.raw.as_str())))
    }

    fn parse_inline_code(&mut self) -> Option<ASTNode> {
        if self.peek_type() != TokenType::Backtick {
            return None;
        }

        let fence = self.eat_run(TokenType::Backtick);
        let mut content = String::new();
        while let Some(token) = self.peek() {
            if token.is(TokenType::Backtick) {
                let run = self.eat_run(TokenType::Backtick);
                if run == fence {
                    break;
                }
                content.push_str(&"`".repeat(run));
            } else {
                content.push_str(&token.raw);
                self.bump();
            }
        }

        Some(ASTNode::Code { content })
    }
}
