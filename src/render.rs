//! HTML projection of a parsed document.
//!
//! Every container becomes an element wrapping its rendered children, leaf
//! content is written as-is. Nothing is escaped and no separators are added
//! between blocks.

use crate::{
    ast::{ASTNode, Document},
    parser::parse_markdown,
};

pub fn render(document: &Document) -> String {
    let mut html = String::new();
    render_children(&document.children, &mut html);

    html
}

/// Parses `input` and renders it in one step.
pub fn markdown_to_html(input: &str) -> String {
    render(&parse_markdown(input))
}

fn render_children(children: &[ASTNode], html: &mut String) {
    for child in children {
        render_node(child, html);
    }
}

fn render_node(node: &ASTNode, html: &mut String) {
    match node {
        ASTNode::Heading { level, children } => {
            let level = level.as_u8();
            html.push_str(&format!("<h{}>", level));
            render_children(children, html);
            html.push_str(&format!("</h{}>", level));
        }
        ASTNode::Paragraph { children } => wrap("p", children, html),
        ASTNode::Blockquote { children } => wrap("blockquote", children, html),
        ASTNode::CodeBlock { language, content } => {
            match language {
                Some(language) => {
                    html.push_str(&format!("<pre><code class=\"language-{}\">", language))
                }
                None => html.push_str("<pre><code>"),
            }
            html.push_str(content);
            html.push_str("</code></pre>");
        }
        ASTNode::Strong { children } => wrap("strong", children, html),
        ASTNode::Emphasis { children } => wrap("em", children, html),
        ASTNode::Code { content } => {
            html.push_str("<code>");
            html.push_str(content);
            html.push_str("</code>");
        }
        ASTNode::Link { url, children } => {
            html.push_str(&format!("<a href=\"{}\">", url));
            render_children(children, html);
            html.push_str("</a>");
        }
        ASTNode::Image { url, alt, .. } => {
            html.push_str(&format!("<img src=\"{}\" alt=\"{}\" />", url, alt));
        }
        ASTNode::Text { content } => html.push_str(content),
    }
}

fn wrap(tag: &str, children: &[ASTNode], html: &mut String) {
    html.push_str(&format!("<{}>", tag));
    render_children(children, html);
    html.push_str(&format!("</{}>", tag));
}
