//! HTML parser module for tree construction.

/// Parser state machine and entry points.
pub mod core;
/// Void and raw-text element tables.
pub mod elements;
/// Tolerated-input records.
pub mod issue;

pub use self::core::{
    HtmlParser, ParserState, parse_html, parse_html_with_issues, print_tree, write_tree,
};
pub use elements::{is_raw_text_element, is_self_closing_element};
pub use issue::{ParseIssue, ParseIssueKind};
