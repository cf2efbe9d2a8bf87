//! Owned node forest returned to callers once parsing is done.
//!
//! The serialized form matches the JSON fixtures consumed by the test harness:
//!
//! ```json
//! [{"type": "element", "tagName": "p", "attributes": {}, "childNodes": [
//!     {"type": "text", "text": "Hi"}
//! ]}]
//! ```

use serde::Serialize;

use crate::attributes::Attributes;

/// A parsed node: element, text, or comment.
///
/// Dropping a node never recurses, however deep the tree. The derived
/// `Clone`, `PartialEq`, `Debug` and `Serialize` impls do recurse, so they
/// are limited by the call stack on pathologically deep trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// An element with its attributes and children.
    Element(Element),
    /// Raw character data between tags. Entities are not decoded.
    Text {
        /// The character data.
        text: String,
    },
    /// Content between `<!--` and `-->`, delimiters excluded.
    Comment {
        /// The comment body.
        text: String,
    },
}

/// Element payload of [`Node::Element`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name exactly as written in the source.
    #[serde(rename = "tagName")]
    pub tag_name: String,
    /// Attributes in source order.
    pub attributes: Attributes,
    /// Child nodes in document order.
    #[serde(rename = "childNodes")]
    pub children: Vec<Node>,
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl Node {
    /// Create an element node.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attributes: Attributes, children: Vec<Self>) -> Self {
        Self::Element(Element {
            tag_name: tag_name.into(),
            attributes,
            children,
        })
    }

    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    /// Tag name if this is an element.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(&element.tag_name),
            _ => None,
        }
    }

    /// Element payload if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Children of an element; empty for text and comments.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and all descendant text nodes.
    ///
    /// Comments contribute nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Text { text } => result.push_str(text),
                Self::Comment { .. } => {}
                Self::Element(element) => pending.extend(element.children.iter().rev()),
            }
        }
        result
    }
}
