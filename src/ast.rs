use serde::Serialize;

use crate::token::HeadingLevel;

/// Root of a parsed document. Owns every block in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub children: Vec<ASTNode>,
}

impl Document {
    pub fn new(children: Vec<ASTNode>) -> Self {
        Document { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn to_html(&self) -> String {
        crate::render::render(self)
    }
}

/// Container variants own `children`, leaf variants (`Text`, `Code`,
/// `CodeBlock`) own `content`. No variant has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ASTNode {
    // Block
    Heading {
        level: HeadingLevel,
        children: Vec<ASTNode>,
    },
    Paragraph {
        children: Vec<ASTNode>,
    },
    Blockquote {
        children: Vec<ASTNode>,
    },
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        content: String,
    },

    // Inline
    Strong {
        children: Vec<ASTNode>,
    },
    Emphasis {
        children: Vec<ASTNode>,
    },
    Code {
        content: String,
    },
    Link {
        url: String,
        children: Vec<ASTNode>,
    },
    Image {
        url: String,
        alt: String,
        children: Vec<ASTNode>,
    },

    // Text
    Text {
        content: String,
    },
}

impl ASTNode {
    pub fn text(content: impl Into<String>) -> Self {
        ASTNode::Text {
            content: content.into(),
        }
    }

    pub fn children(&self) -> &[ASTNode] {
        match self {
            ASTNode::Heading { children, .. }
            | ASTNode::Paragraph { children }
            | ASTNode::Blockquote { children }
            | ASTNode::Strong { children }
            | ASTNode::Emphasis { children }
            | ASTNode::Link { children, .. }
            | ASTNode::Image { children, .. } => children,
            ASTNode::CodeBlock { .. } | ASTNode::Code { .. } | ASTNode::Text { .. } => &[],
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            ASTNode::Text { content }
            | ASTNode::Code { content }
            | ASTNode::CodeBlock { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Concatenated leaf content of this node and everything below it.
    pub fn text_content(&self) -> String {
        match self.content() {
            Some(content) => content.to_string(),
            None => self.children().iter().map(ASTNode::text_content).collect(),
        }
    }
}

/// Alt text of an image: the content of its direct text-bearing children.
/// Nested markup contributes nothing.
pub(crate) fn image_alt(children: &[ASTNode]) -> String {
    children.iter().filter_map(ASTNode::content).collect()
}
