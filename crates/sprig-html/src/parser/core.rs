//! Parser state transitions:
//!
//! ```text
//! Superfluous  > Comment | Text | ElementOpen | ElementClose
//! Comment      > Superfluous
//! Text         > Superfluous
//! ElementOpen  > Superfluous
//! ElementClose > Superfluous
//! ```
//!
//! Every state stops the parse when it is entered with no input left.

use std::io::{self, Write};

use strum_macros::Display;

use sprig_common::warning::warn_once;
use sprig_dom::{AttributeValue, DomTree, ElementData, Node, NodeId, NodeType};

use super::elements::{is_raw_text_element, is_self_closing_element};
use super::issue::{ParseIssue, ParseIssueKind};
use crate::cursor::Cursor;

/// Length of the literal `<!DOCTYPE`.
const DOCTYPE_LENGTH: usize = 9;

/// Component name used for shared warnings.
const WARNING_COMPONENT: &str = "HTML Parser";

/// States of the parser loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParserState {
    /// Decide what the next node is.
    Superfluous,
    /// Character data up to the next `<`.
    Text,
    /// Comment body up to `-->`.
    Comment,
    /// Opening tag, plus the body of raw-text elements.
    ElementOpen,
    /// Closing tag.
    ElementClose,
}

/// Builds a node tree from an HTML string.
///
/// Parsing never fails. Malformed input yields an approximate tree, and each
/// workaround is recorded as a [`ParseIssue`].
pub struct HtmlParser {
    cursor: Cursor,

    /// Arena holding the root fragment and every parsed node.
    tree: DomTree,

    /// Root fragment plus every open element that may still receive
    /// children. The last entry is the insertion point.
    open_elements: Vec<NodeId>,

    issues: Vec<ParseIssue>,

    /// Echo issues through the shared warning channel.
    warnings: bool,
}

impl HtmlParser {
    /// Create a parser over `html`.
    #[must_use]
    pub fn new(html: &str) -> Self {
        let tree = DomTree::new();
        let root = tree.root();
        Self {
            cursor: Cursor::new(html),
            tree,
            open_elements: vec![root],
            issues: Vec::new(),
            warnings: true,
        }
    }

    /// Enable or disable stderr warnings for tolerated input (on by default).
    ///
    /// Issues are collected either way.
    #[must_use]
    pub const fn with_warnings(mut self, enabled: bool) -> Self {
        self.warnings = enabled;
        self
    }

    /// Run the parser and return the tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Run the parser and return both the tree and any tolerated issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        self.skip_declaration();

        let mut state = ParserState::Superfluous;
        while let Some(next) = self.step(state) {
            state = next;
        }

        (self.tree, self.issues)
    }

    /// Run one state. `None` means the input is exhausted.
    fn step(&mut self, state: ParserState) -> Option<ParserState> {
        if self.cursor.is_exhausted() {
            return None;
        }

        let next = match state {
            ParserState::Superfluous => self.handle_superfluous(),
            ParserState::Text => self.handle_text(),
            ParserState::Comment => self.handle_comment(),
            ParserState::ElementOpen => self.handle_element_open(),
            ParserState::ElementClose => self.handle_element_close(),
        };
        Some(next)
    }

    /// Skip a leading `<!...>` declaration.
    ///
    /// Jumps past the length of `<!DOCTYPE` and then up to the next `<`,
    /// whatever the declaration actually was. A leading comment is left for
    /// the comment state.
    fn skip_declaration(&mut self) {
        if !self.cursor.starts_with("<!") || self.cursor.starts_with("<!--") {
            return;
        }

        let head = self.cursor.read_chars(DOCTYPE_LENGTH, false);
        if !head.eq_ignore_ascii_case("<!DOCTYPE") {
            self.record_issue(ParseIssueKind::SkippedDeclaration, ParserState::Superfluous, 0);
        }

        self.cursor.set_offset(DOCTYPE_LENGTH);
        let _declaration = self.cursor.read_chars_until("<", true, false);
    }

    fn handle_superfluous(&mut self) -> ParserState {
        if self.cursor.starts_with("<!--") {
            self.cursor.advance(4);
            ParserState::Comment
        } else if self.cursor.starts_with("</") {
            self.cursor.advance(2);
            ParserState::ElementClose
        } else if self.cursor.starts_with("<") {
            self.cursor.advance(1);
            ParserState::ElementOpen
        } else {
            ParserState::Text
        }
    }

    fn handle_text(&mut self) -> ParserState {
        let text = self.cursor.read_chars_until("<", true, false);
        let _text = self.append_child_node(NodeType::Text(text));
        ParserState::Superfluous
    }

    fn handle_comment(&mut self) -> ParserState {
        let start = self.cursor.offset();
        if self.cursor.find_sequence("-->").is_none() {
            self.record_issue(ParseIssueKind::UnterminatedComment, ParserState::Comment, start);
        }

        let text = self.cursor.read_chars_until("-->", true, true);
        let _comment = self.append_child_node(NodeType::Comment(text));
        ParserState::Superfluous
    }

    fn handle_element_open(&mut self) -> ParserState {
        let start = self.cursor.offset();
        let tag_name = self.cursor.read_tag_name();
        let attributes = self.cursor.read_attributes();
        let element = self.append_child_node(NodeType::Element(ElementData::new(
            tag_name.clone(),
            attributes,
        )));

        if self.cursor.find_sequence(">").is_none() {
            self.record_issue(ParseIssueKind::UnterminatedTag, ParserState::ElementOpen, start);
        }
        let tag_end = self.cursor.read_chars_until(">", true, true);

        if !tag_end.ends_with('/') && !is_self_closing_element(&tag_name) {
            self.open_elements.push(element);
        }

        // The body goes to the insertion point, so a self-closed `<script/>`
        // keeps no children and its body becomes a sibling.
        if is_raw_text_element(&tag_name) {
            let closing = format!("</{tag_name}");
            let body_start = self.cursor.offset();
            if !self.cursor.is_exhausted() && self.cursor.find_sequence(&closing).is_none() {
                self.record_issue(
                    ParseIssueKind::UnterminatedRawText,
                    ParserState::ElementOpen,
                    body_start,
                );
            }

            let content = self.cursor.read_chars_until(&closing, true, false);
            if !content.is_empty() {
                let _text = self.append_child_node(NodeType::Text(content));
            }
        }

        ParserState::Superfluous
    }

    fn handle_element_close(&mut self) -> ParserState {
        let start = self.cursor.offset();
        if self.cursor.find_sequence(">").is_none() {
            self.record_issue(ParseIssueKind::UnterminatedTag, ParserState::ElementClose, start);
        }

        // The closing tag name is not checked against the open element.
        let _tag = self.cursor.read_chars_until(">", true, true);

        // The root fragment is never popped.
        if self.open_elements.len() > 1 {
            let _closed = self.open_elements.pop();
        } else {
            self.record_issue(
                ParseIssueKind::UnmatchedClosingTag,
                ParserState::ElementClose,
                start,
            );
        }

        ParserState::Superfluous
    }

    /// Append a new node to the current insertion point.
    fn append_child_node(&mut self, node_type: NodeType) -> NodeId {
        let parent = self.current_node();
        let child = self.tree.alloc(node_type);
        self.tree.append_child(parent, child);
        child
    }

    /// The innermost open element, or the root fragment.
    fn current_node(&self) -> NodeId {
        self.open_elements
            .last()
            .copied()
            .unwrap_or_else(|| self.tree.root())
    }

    fn record_issue(&mut self, kind: ParseIssueKind, state: ParserState, offset: usize) {
        if self.warnings {
            let _first = warn_once(WARNING_COMPONENT, &kind.to_string());
        }
        self.issues.push(ParseIssue {
            kind,
            state,
            offset,
        });
    }
}

/// Parse `html` into its top-level nodes.
///
/// Never fails; malformed input produces an approximate tree.
#[must_use]
pub fn parse_html(html: &str) -> Vec<Node> {
    HtmlParser::new(html).run().into_nodes()
}

/// Parse `html`, also returning every tolerated issue.
///
/// Does not print warnings; callers decide what to do with the issues.
#[must_use]
pub fn parse_html_with_issues(html: &str) -> (Vec<Node>, Vec<ParseIssue>) {
    let (tree, issues) = HtmlParser::new(html).with_warnings(false).run_with_issues();
    (tree.into_nodes(), issues)
}

/// Print a tree for debugging, one node per line.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let mut out = io::stdout().lock();
    // A closed stdout is not worth reporting from a debug dump.
    let _written = write_tree(&mut out, tree, id, indent);
}

/// Write the [`print_tree`] dump to `out`.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_tree<W: Write>(
    out: &mut W,
    tree: &DomTree,
    id: NodeId,
    indent: usize,
) -> io::Result<()> {
    let mut pending = vec![(id, indent)];
    while let Some((id, depth)) = pending.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let prefix = "  ".repeat(depth);
        match &node.node_type {
            NodeType::Fragment => writeln!(out, "{prefix}#fragment")?,
            NodeType::Element(data) => {
                if data.attributes.is_empty() {
                    writeln!(out, "{prefix}<{}>", data.tag_name)?;
                } else {
                    let attrs: Vec<String> = data
                        .attributes
                        .iter()
                        .map(|(name, value)| match value {
                            AttributeValue::Flag => name.to_string(),
                            AttributeValue::Text(text) => format!("{name}=\"{text}\""),
                        })
                        .collect();
                    writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))?;
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{prefix}\"{display}\"")?;
            }
            NodeType::Comment(data) => writeln!(out, "{prefix}<!--{data}-->")?,
        }
        pending.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
    }
    Ok(())
}
