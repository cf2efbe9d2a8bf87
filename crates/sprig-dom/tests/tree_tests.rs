//! Tests for the arena tree and its conversion to owned nodes.

use sprig_dom::{AttributeValue, Attributes, DomTree, ElementData, Node, NodeId, NodeType};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag, Attributes::new())))
}

// ========== append_child ==========

#[test]
fn test_new_tree_has_only_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), NodeId::ROOT);
    assert!(tree.children(NodeId::ROOT).is_empty());
    assert!(tree.into_nodes().is_empty());
}

#[test]
fn test_append_child_links_siblings() {
    let mut tree = DomTree::new();
    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(NodeId::ROOT, a);
    tree.append_child(NodeId::ROOT, b);
    tree.append_child(NodeId::ROOT, c);

    assert_eq!(tree.children(NodeId::ROOT), &[a, b, c]);
    assert_eq!(tree.first_child(NodeId::ROOT), Some(a));
    assert_eq!(tree.last_child(NodeId::ROOT), Some(c));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(c), None);
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.parent(b), Some(NodeId::ROOT));
}

#[test]
fn test_detached_node_has_no_parent() {
    let mut tree = DomTree::new();
    let orphan = alloc_element(&mut tree, "p");
    assert_eq!(tree.parent(orphan), None);
    assert_eq!(tree.ancestors(orphan).count(), 0);
    assert!(tree.into_nodes().is_empty());
}

#[test]
fn test_unknown_id_lookups_are_empty() {
    let tree = DomTree::new();
    let missing = NodeId(42);
    assert!(tree.get(missing).is_none());
    assert!(tree.children(missing).is_empty());
    assert_eq!(tree.parent(missing), None);
    assert!(tree.to_node(missing).is_none());
}

// ========== accessors ==========

#[test]
fn test_typed_accessors() {
    let mut tree = DomTree::new();
    let mut attributes = Attributes::new();
    let _ = attributes.insert("id", AttributeValue::from_raw("main"));
    let div = tree.alloc(NodeType::Element(ElementData::new("div", attributes)));
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    let comment = tree.alloc(NodeType::Comment(" c ".to_string()));
    tree.append_child(NodeId::ROOT, div);
    tree.append_child(div, text);
    tree.append_child(div, comment);

    assert_eq!(tree.as_element(div).and_then(ElementData::id), Some("main"));
    assert_eq!(tree.as_text(text), Some("hello"));
    assert_eq!(tree.as_comment(comment), Some(" c "));
    assert!(tree.as_element(text).is_none());
    assert!(tree.as_text(comment).is_none());
    assert_eq!(tree.ancestors(comment).collect::<Vec<_>>(), vec![div, NodeId::ROOT]);
}

// ========== conversion ==========

#[test]
fn test_into_nodes_builds_owned_forest() {
    let mut tree = DomTree::new();
    let ul = alloc_element(&mut tree, "ul");
    let li = alloc_element(&mut tree, "li");
    let text = tree.alloc(NodeType::Text("one".to_string()));
    let after = tree.alloc(NodeType::Comment("end".to_string()));
    tree.append_child(NodeId::ROOT, ul);
    tree.append_child(ul, li);
    tree.append_child(li, text);
    tree.append_child(NodeId::ROOT, after);

    assert_eq!(
        tree.to_node(li),
        Some(Node::element("li", Attributes::new(), vec![Node::text("one")]))
    );
    assert!(tree.to_node(NodeId::ROOT).is_none());

    assert_eq!(
        tree.into_nodes(),
        vec![
            Node::element(
                "ul",
                Attributes::new(),
                vec![Node::element("li", Attributes::new(), vec![Node::text("one")])]
            ),
            Node::comment("end"),
        ]
    );
}

#[test]
fn test_forest_of_element() {
    let mut tree = DomTree::new();
    let p = alloc_element(&mut tree, "p");
    let a = tree.alloc(NodeType::Text("a".to_string()));
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, p);
    tree.append_child(p, a);
    tree.append_child(p, b);

    assert_eq!(
        tree.forest(p),
        vec![Node::text("a"), Node::element("b", Attributes::new(), vec![])]
    );
}

#[test]
fn test_nested_fragment_is_spliced() {
    let mut tree = DomTree::new();
    let fragment = tree.alloc(NodeType::Fragment);
    let x = tree.alloc(NodeType::Text("x".to_string()));
    let y = tree.alloc(NodeType::Text("y".to_string()));
    tree.append_child(NodeId::ROOT, fragment);
    tree.append_child(fragment, x);
    tree.append_child(NodeId::ROOT, y);

    assert_eq!(tree.into_nodes(), vec![Node::text("x"), Node::text("y")]);
}

#[test]
fn test_deep_conversion_without_recursion() {
    let depth = 100_000;
    let mut tree = DomTree::new();
    let mut parent = NodeId::ROOT;
    for _ in 0..depth {
        let child = alloc_element(&mut tree, "div");
        tree.append_child(parent, child);
        parent = child;
    }

    let nodes = tree.into_nodes();
    let mut level = &nodes[0];
    let mut seen = 1;
    while let Some(child) = level.children().first() {
        level = child;
        seen += 1;
    }
    assert_eq!(seen, depth);
}
