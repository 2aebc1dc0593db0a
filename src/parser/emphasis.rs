use super::{inline::push_inline, Parser};
use crate::{ast::ASTNode, token::TokenType};

impl<'a> Parser<'a> {
    /// `*em*`, `_em_`, `**strong**` or `__strong__`.
    ///
    /// A span is only closed by the marker it was opened with. A span that is
    /// never closed takes everything up to EOF as its children.
    pub(super) fn parse_emphasis(&mut self) -> Option<ASTNode> {
        let marker = self.peek_type();
        if !matches!(marker, TokenType::Asterisk | TokenType::Underscore) {
            return None;
        }

        self.nested(|parser| Some(parser.scan_emphasis(marker)))
    }

    fn scan_emphasis(&mut self, marker: TokenType) -> ASTNode {
        let width = if self.peek_type_at(1) == marker { 2 } else { 1 };
        self.position += width;

        let mut children = Vec::new();
        loop {
            match self.peek_type() {
                TokenType::Eof => break,
                token_type if token_type == marker && self.closes(marker, width) => {
                    self.position += width;
                    break;
                }
                TokenType::Newline => {
                    self.bump();
                    push_inline(&mut children, ASTNode::text("\n"));
                }
                _ => match self.parse_inline() {
                    Some(node) => push_inline(&mut children, node),
                    None => break,
                },
            }
        }

        if width == 2 {
            ASTNode::Strong { children }
        } else {
            ASTNode::Emphasis { children }
        }
    }

    fn closes(&self, marker: TokenType, width: usize) -> bool {
        (0..width).all(|offset| self.peek_type_at(offset) == marker)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::ASTNode,
        parser::{parse_markdown, MAX_NESTING},
    };

    fn inlines(input: &str) -> Vec<ASTNode> {
        match parse_markdown(input).children.as_slice() {
            [ASTNode::Paragraph { children }] => children.clone(),
            other => panic!("expected a single paragraph, got {:?}", other),
        }
    }

    fn em(children: Vec<ASTNode>) -> ASTNode {
        ASTNode::Emphasis { children }
    }

    fn strong(children: Vec<ASTNode>) -> ASTNode {
        ASTNode::Strong { children }
    }

    fn span_depth(node: &ASTNode) -> usize {
        let inner = node.children().iter().map(span_depth).max().unwrap_or(0);
        match node {
            ASTNode::Emphasis { .. } | ASTNode::Strong { .. } => inner + 1,
            _ => inner,
        }
    }

    #[test]
    fn parse_strong() {
        assert_eq!(inlines("**bold**"), vec![strong(vec![ASTNode::text("bold")])]);
        assert_eq!(inlines("__bold__"), vec![strong(vec![ASTNode::text("bold")])]);
    }

    #[test]
    fn parse_emphasis_pair() {
        assert_eq!(
            inlines("*a* and _b_"),
            vec![
                em(vec![ASTNode::text("a")]),
                ASTNode::text(" and "),
                em(vec![ASTNode::text("b")]),
            ]
        );
    }

    #[test]
    fn parse_nested() {
        assert_eq!(
            inlines("_You **can** combine them_"),
            vec![em(vec![
                ASTNode::text("You "),
                strong(vec![ASTNode::text("can")]),
                ASTNode::text(" combine them"),
            ])]
        );
        assert_eq!(
            inlines("**a *b* c**"),
            vec![strong(vec![
                ASTNode::text("a "),
                em(vec![ASTNode::text("b")]),
                ASTNode::text(" c"),
            ])]
        );
    }

    #[test]
    fn markers_do_not_mix() {
        // `_` opens its own span, it never closes `*`
        assert_eq!(
            inlines("*a_"),
            vec![em(vec![ASTNode::text("a"), em(vec![])])]
        );
        assert_eq!(
            inlines("__a**"),
            vec![strong(vec![ASTNode::text("a"), strong(vec![])])]
        );
    }

    #[test]
    fn parse_emphasis_with_code_and_link() {
        assert_eq!(
            inlines("*see `x` in [docs](d)*"),
            vec![em(vec![
                ASTNode::text("see "),
                ASTNode::Code {
                    content: "x".to_string(),
                },
                ASTNode::text(" in "),
                ASTNode::Link {
                    url: "d".to_string(),
                    children: vec![ASTNode::text("docs")],
                },
            ])]
        );
    }

    #[test]
    fn unclosed_emphasis_runs_to_eof() {
        assert_eq!(
            parse_markdown("*open\n\n# not a heading").children,
            vec![ASTNode::Paragraph {
                children: vec![em(vec![ASTNode::text("open\n\n# not a heading")])],
            }]
        );
    }

    #[test]
    fn unclosed_strong_runs_to_eof() {
        assert_eq!(
            inlines("**open"),
            vec![strong(vec![ASTNode::text("open")])]
        );
    }

    #[test]
    fn empty_emphasis() {
        // a lone marker pair is an empty strong span
        assert_eq!(inlines("**"), vec![strong(vec![])]);
    }

    #[test]
    fn nesting_past_limit_is_text() {
        let input = "*_".repeat(MAX_NESTING);
        let children = inlines(&format!("{}x", input));
        let depth = children.iter().map(span_depth).max().unwrap_or(0);
        assert_eq!(depth, MAX_NESTING);

        // the innermost span is `_`, the `*` after it can no longer open one
        let mut node = &children[0];
        while let Some(inner) = node.children().iter().find(|n| span_depth(n) > 0) {
            node = inner;
        }
        assert_eq!(node, &em(vec![ASTNode::text("*")]));
    }

    #[test]
    fn deep_unclosed_markers() {
        let children = inlines(&"*_".repeat(100_000));
        let depth = children.iter().map(span_depth).max().unwrap_or(0);
        assert_eq!(depth, MAX_NESTING);
    }
}
