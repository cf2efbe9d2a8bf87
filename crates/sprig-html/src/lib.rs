//! Lightweight HTML-to-tree parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor and readers** - a character cursor plus tag-name and attribute
//!   readers that advance it
//! - **Parser** - a five-state loop (superfluous, text, comment, element open,
//!   element close) that builds an arena tree with a stack of open elements
//! - **Fixture harness** - runs `input.html` / `output.json` case directories
//!
//! ```
//! use sprig_html::parse_html;
//! use sprig_dom::Node;
//!
//! let nodes = parse_html("<p>Hi</p>");
//! assert_eq!(nodes[0].tag_name(), Some("p"));
//! assert_eq!(nodes[0].children(), &[Node::text("Hi")]);
//! ```
//!
//! # Not Implemented
//!
//! - Streaming input
//! - Character reference decoding (`&amp;` stays as written)
//! - Implied tags, error recovery, or closing-tag matching beyond popping the
//!   innermost open element
//! - Encoding detection

/// Character cursor and primitive readers.
pub mod cursor;
/// Fixture directories with expected JSON output.
pub mod fixtures;
/// HTML parser and tree construction.
pub mod parser;

pub use cursor::Cursor;
pub use parser::{
    HtmlParser, ParseIssue, ParseIssueKind, ParserState, parse_html, parse_html_with_issues,
    print_tree, write_tree,
};
