//! Tests for owned nodes, attributes and their JSON form.

use serde_json::json;
use sprig_dom::{AttributeValue, Attributes, Node};

#[test]
fn test_attribute_value_from_raw() {
    assert_eq!(AttributeValue::from_raw(""), AttributeValue::Flag);
    assert_eq!(
        AttributeValue::from_raw("x"),
        AttributeValue::Text("x".to_string())
    );
    assert!(AttributeValue::Flag.is_flag());
    assert_eq!(AttributeValue::from_raw(" ").as_text(), Some(" "));
    assert_eq!(AttributeValue::Flag.as_text(), None);
}

#[test]
fn test_attributes_insert_rules() {
    let mut attributes = Attributes::new();
    assert_eq!(attributes.insert("", AttributeValue::Flag), None);
    assert!(attributes.is_empty());

    assert_eq!(attributes.insert("b", AttributeValue::Flag), None);
    assert_eq!(attributes.insert("a", AttributeValue::from_raw("1")), None);
    assert_eq!(
        attributes.insert("b", AttributeValue::from_raw("2")),
        Some(AttributeValue::Flag)
    );

    assert_eq!(attributes.len(), 2);
    assert!(attributes.contains("a"));
    assert!(!attributes.contains("A"));
    let pairs: Vec<(&str, Option<&str>)> = attributes
        .iter()
        .map(|(name, value)| (name, value.as_text()))
        .collect();
    assert_eq!(pairs, vec![("b", Some("2")), ("a", Some("1"))]);
}

#[test]
fn test_node_helpers() {
    let node = Node::element(
        "p",
        Attributes::new(),
        vec![
            Node::text("a"),
            Node::comment("skip"),
            Node::element("b", Attributes::new(), vec![Node::text("c")]),
        ],
    );
    assert_eq!(node.tag_name(), Some("p"));
    assert_eq!(node.children().len(), 3);
    assert_eq!(node.text_content(), "ac");
    assert!(node.as_element().is_some());

    let text = Node::text("t");
    assert_eq!(text.tag_name(), None);
    assert!(text.children().is_empty());
    assert_eq!(Node::comment("c").text_content(), "");
}

#[test]
fn test_serialized_shape() {
    let attributes: Attributes = [
        ("disabled", AttributeValue::Flag),
        ("value", AttributeValue::from_raw("x")),
    ]
    .into_iter()
    .collect();
    let nodes = vec![
        Node::element("input", attributes, vec![]),
        Node::text("hi"),
        Node::comment(" c "),
    ];

    assert_eq!(
        serde_json::to_value(&nodes).expect("serialize"),
        json!([
            {
                "type": "element",
                "tagName": "input",
                "attributes": { "disabled": true, "value": "x" },
                "childNodes": []
            },
            { "type": "text", "text": "hi" },
            { "type": "comment", "text": " c " }
        ])
    );
}

#[test]
fn test_attribute_order_in_json_text() {
    let attributes: Attributes = [
        ("z", AttributeValue::Flag),
        ("a", AttributeValue::from_raw("1")),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_string(&Node::element("i", attributes, vec![])).expect("serialize");
    assert_eq!(
        json,
        r#"{"type":"element","tagName":"i","attributes":{"z":true,"a":"1"},"childNodes":[]}"#
    );
}

#[test]
fn test_deep_node_drops_without_recursion() {
    let mut node = Node::text("leaf");
    for _ in 0..200_000 {
        node = Node::element("div", Attributes::new(), vec![node]);
    }
    assert_eq!(node.text_content(), "leaf");
    drop(node);
}
