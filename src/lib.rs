//! Markdown to AST front end.
//!
//! Source text is split into positioned tokens by [`tokenize`], turned into a
//! [`Document`] by [`parse`], and optionally projected to HTML by [`render`].
//! Every stage is total: malformed input degrades to plain text instead of
//! failing.
//!
//! ```
//! use caffe_markdown::{parse_markdown, ASTNode, HeadingLevel};
//!
//! let document = parse_markdown("# Title");
//! assert_eq!(
//!     document.children,
//!     vec![ASTNode::Heading {
//!         level: HeadingLevel::H1,
//!         children: vec![ASTNode::text("Title")],
//!     }]
//! );
//! assert_eq!(document.to_html(), "<h1>Title</h1>");
//! ```

pub mod ast;
pub mod parser;
pub mod render;
pub mod token;
pub mod tokenizer;
mod util;

pub use ast::{ASTNode, Document};
pub use parser::{parse, parse_markdown, Parser, MAX_NESTING};
pub use render::{markdown_to_html, render};
pub use token::{HeadingLevel, Position, Token, TokenType};
pub use tokenizer::{tokenize, Tokenizer};
