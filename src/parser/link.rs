use super::{inline::push_inline, Parser};
use crate::{
    ast::{image_alt, ASTNode},
    token::TokenType,
};

impl<'a> Parser<'a> {
    /// `[label](url)` or `![label](url)`.
    pub(super) fn parse_link(&mut self) -> Option<ASTNode> {
        let start = self.position;
        if self.failed_links.contains(&start) {
            return None;
        }

        let link = self.nested(|parser| parser.speculate(Self::scan_link));
        if link.is_none() {
            self.failed_links.insert(start);
        }

        link
    }

    fn scan_link(&mut self) -> Option<ASTNode> {
        let is_image = self.eat(TokenType::Exclamation);
        if !self.eat(TokenType::LeftBracket) {
            return None;
        }

        // the first `]` ends the label, labels never span lines
        let mut children = Vec::new();
        loop {
            match self.peek_type() {
                TokenType::RightBracket => break,
                token_type if token_type.is_line_end() => return None,
                _ => push_inline(&mut children, self.parse_inline()?),
            }
        }
        self.bump(); // skip ']'

        if !self.eat(TokenType::LeftParen) {
            return None;
        }

        let mut url = String::new();
        while !matches!(
            self.peek_type(),
            TokenType::RightParen | TokenType::Whitespace | TokenType::Newline | TokenType::Eof
        ) {
            url.push_str(&self.bump()?.raw);
        }

        if !self.eat(TokenType::RightParen) {
            return None;
        }

        Some(if is_image {
            ASTNode::Image {
                alt: image_alt(&children),
                url,
                children,
            }
        } else {
            ASTNode::Link { url, children }
        })
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

    fn link(url: &str, children: Vec<ASTNode>) -> ASTNode {
        ASTNode::Link {
            url: url.to_string(),
            children,
        }
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            inlines("[text](http://x)"),
            vec![link("http://x", vec![ASTNode::text("text")])]
        );
    }

    #[test]
    fn parse_link_url_tokens_are_joined() {
        assert_eq!(
            inlines("see [the docs](https://example.com/a_b-c.html#top)!"),
            vec![
                ASTNode::text("see "),
                link(
                    "https://example.com/a_b-c.html#top",
                    vec![ASTNode::text("the docs")]
                ),
                ASTNode::text("!"),
            ]
        );
    }

    #[test]
    fn parse_link_with_markup_in_label() {
        assert_eq!(
            inlines("[**bold** link](/x)"),
            vec![link(
                "/x",
                vec![
                    ASTNode::Strong {
                        children: vec![ASTNode::text("bold")],
                    },
                    ASTNode::text(" link"),
                ]
            )]
        );
    }

    #[test]
    fn parse_link_empty_parts() {
        assert_eq!(inlines("[]()"), vec![link("", vec![])]);
    }

    #[test]
    fn parse_image() {
        assert_eq!(
            inlines("![Image *of* a cat](https://example.com/cat.jpg)"),
            vec![ASTNode::Image {
                url: "https://example.com/cat.jpg".to_string(),
                alt: "Image  a cat".to_string(),
                children: vec![
                    ASTNode::text("Image "),
                    ASTNode::Emphasis {
                        children: vec![ASTNode::text("of")],
                    },
                    ASTNode::text(" a cat"),
                ],
            }]
        );
    }

    #[test]
    fn missing_close_paren_is_text() {
        assert_eq!(inlines("[text]("), vec![ASTNode::text("[text](")]);
        assert_eq!(inlines("[text](http://x"), vec![ASTNode::text("[text](http://x")]);
    }

    #[test]
    fn missing_paren_is_text() {
        assert_eq!(inlines("[text] (x)"), vec![ASTNode::text("[text] (x)")]);
        assert_eq!(inlines("[text]"), vec![ASTNode::text("[text]")]);
    }

    #[test]
    fn missing_close_bracket_is_text() {
        assert_eq!(inlines("[text"), vec![ASTNode::text("[text")]);
    }

    #[test]
    fn space_in_url_fails_link() {
        // titles are not supported
        assert_eq!(
            inlines("[a](b \"t\")"),
            vec![ASTNode::text("[a](b \"t\")")]
        );
    }

    #[test]
    fn bang_without_bracket_is_text() {
        assert_eq!(
            inlines("Wow! [a](b)"),
            vec![ASTNode::text("Wow! "), link("b", vec![ASTNode::text("a")])]
        );
    }

    #[test]
    fn first_bracket_ends_label() {
        assert_eq!(
            inlines("[a]b](c)"),
            vec![ASTNode::text("[a]b](c)")]
        );
    }

    #[test]
    fn link_inside_label_is_kept() {
        // the inner link consumes its own `]`, so the outer label ends later
        assert_eq!(
            inlines("[[a](b)](c)"),
            vec![link("c", vec![link("b", vec![ASTNode::text("a")])])]
        );
    }

    #[test]
    fn label_does_not_cross_lines() {
        assert_eq!(
            parse_markdown("[a\nb](c)").children,
            vec![
                ASTNode::Paragraph {
                    children: vec![ASTNode::text("[a")],
                },
                ASTNode::Paragraph {
                    children: vec![ASTNode::text("b](c)")],
                },
            ]
        );
    }

    #[test]
    fn many_open_brackets() {
        let input = "[".repeat(200);
        assert_eq!(inlines(&input), vec![ASTNode::text(input.clone())]);
    }

    #[test]
    fn deep_open_brackets() {
        let input = "[".repeat(100_000);
        assert_eq!(inlines(&input), vec![ASTNode::text(input.clone())]);
    }

    #[test]
    fn link_past_nesting_limit_is_text() {
        // the bracket one level too deep cannot open a label of its own
        let open = "[".repeat(MAX_NESTING);
        let close = "](u)".repeat(MAX_NESTING - 1);
        let children = inlines(&format!("{}[a](b){}", open, close));

        let mut depth = 1;
        let mut node = &children[0];
        while let [inner @ ASTNode::Link { .. }] = node.children() {
            depth += 1;
            node = inner;
        }
        assert_eq!(depth, MAX_NESTING);
        assert_eq!(node, &link("b", vec![ASTNode::text("[a")]));
    }
}
