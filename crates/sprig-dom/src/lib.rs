//! Node model for the sprig HTML parser.
//!
//! Two representations live here:
//!
//! - [`DomTree`]: an arena used while parsing. All relationships are
//!   [`NodeId`] indices, so the parser can keep a stack of open elements
//!   without holding references into the tree it is still building.
//! - [`Node`]: the owned forest handed back to callers, produced from the
//!   arena by [`DomTree::into_nodes`].

/// Insertion-ordered attribute map and values.
pub mod attributes;
/// Owned output nodes.
pub mod node;

pub use attributes::{AttributeValue, Attributes};
pub use node::{Element, Node};

/// A type-safe index into the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root fragment is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node stored in the arena, with parent, child and sibling links.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// What kind of node this is.
    pub node_type: NodeType,
    /// Parent node, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// The node immediately after this one under the same parent.
    pub next_sibling: Option<NodeId>,
    /// The node immediately before this one under the same parent.
    pub prev_sibling: Option<NodeId>,
}

/// Node kinds stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// Anonymous container. Only the synthetic root uses it and it is never
    /// emitted as output; only its children are.
    Fragment,
    /// An element.
    Element(ElementData),
    /// Raw character data.
    Text(String),
    /// Comment body.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name exactly as written.
    pub tag_name: String,
    /// Attributes in source order.
    pub attributes: Attributes,
}

impl ElementData {
    /// Create element data with the given tag name and attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
        }
    }
}

/// Arena-based tree with O(1) node access and traversal.
///
/// All nodes live in one vector and refer to each other by index. The root
/// fragment is always at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<TreeNode>,
}

impl DomTree {
    /// Create a new tree holding only the root fragment.
    #[must_use]
    pub fn new() -> Self {
        let root = TreeNode {
            node_type: NodeType::Fragment,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        Self { nodes: vec![root] }
    }

    /// Get the root fragment ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the arena, root included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root fragment is allocated on construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, updating all links.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get the comment body if this node is a comment.
    #[must_use]
    pub fn as_comment(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Comment(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Build the owned subtree rooted at `id`.
    ///
    /// Returns `None` for an unknown ID or for a fragment, which has no
    /// single-node representation (see [`DomTree::forest`]).
    #[must_use]
    pub fn to_node(&self, id: NodeId) -> Option<Node> {
        match self.get(id)?.node_type {
            NodeType::Fragment => None,
            _ => self.build_forest(std::slice::from_ref(&id)).pop(),
        }
    }

    /// Build the owned forest of `id`'s children.
    #[must_use]
    pub fn forest(&self, id: NodeId) -> Vec<Node> {
        self.build_forest(self.children(id))
    }

    /// Consume the arena and return the root fragment's children.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.forest(NodeId::ROOT)
    }

    /// Convert arena nodes to owned nodes without recursion, so arbitrarily
    /// deep documents do not exhaust the call stack.
    fn build_forest(&self, roots: &[NodeId]) -> Vec<Node> {
        struct Frame<'a> {
            owner: Option<NodeId>,
            pending: &'a [NodeId],
            next: usize,
            built: Vec<Node>,
        }

        let mut stack = vec![Frame {
            owner: None,
            pending: roots,
            next: 0,
            built: Vec::with_capacity(roots.len()),
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(&child) = frame.pending.get(frame.next) {
                frame.next += 1;
                let Some(node) = self.get(child) else {
                    continue;
                };
                match &node.node_type {
                    NodeType::Text(text) => frame.built.push(Node::text(text.clone())),
                    NodeType::Comment(text) => frame.built.push(Node::comment(text.clone())),
                    NodeType::Element(_) | NodeType::Fragment => stack.push(Frame {
                        owner: Some(child),
                        pending: &node.children,
                        next: 0,
                        built: Vec::with_capacity(node.children.len()),
                    }),
                }
                continue;
            }

            let Some(done) = stack.pop() else {
                break;
            };
            let Some(parent) = stack.last_mut() else {
                return done.built;
            };
            match done.owner.and_then(|id| self.as_element(id)) {
                Some(data) => parent.built.push(Node::element(
                    data.tag_name.clone(),
                    data.attributes.clone(),
                    done.built,
                )),
                // Nested fragments splice their children into the parent.
                None => parent.built.extend(done.built),
            }
        }

        Vec::new()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
