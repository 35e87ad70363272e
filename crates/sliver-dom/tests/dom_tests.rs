//! Tests for the node tree: accessors, traversal, dump, teardown.

use sliver_dom::{
    Attribute, Element, Node, NodeKind, dump_tree, find_first, teardown, walk,
};

/// Helper to build an element node.
fn element(name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element(Element::new(
        name.to_string(),
        attrs
            .iter()
            .map(|(k, v)| Attribute::new((*k).to_string(), (*v).to_string()))
            .collect(),
        children,
    ))
}

/// Helper to build a text node.
fn text(content: &str) -> Node {
    Node::Text(content.to_string())
}

/// `<div class="a b" disabled>x<!-- c --> <span id="s">y</span></div>`
fn sample() -> Node {
    element(
        "div",
        &[("class", "a b"), ("disabled", "")],
        vec![
            text("x"),
            Node::Comment(" c ".to_string()),
            Node::Whitespace,
            element("span", &[("id", "s")], vec![text("y")]),
        ],
    )
}

// ========== accessors ==========

#[test]
fn test_node_kinds() {
    assert_eq!(sample().kind(), NodeKind::Element);
    assert_eq!(text("x").kind(), NodeKind::Text);
    assert_eq!(Node::Comment(String::new()).kind(), NodeKind::Comment);
    assert_eq!(Node::Whitespace.kind(), NodeKind::Whitespace);
    assert_eq!(NodeKind::Whitespace.to_string(), "whitespace");
}

#[test]
fn test_element_accessors() {
    let root = sample();
    let div = root.as_element().expect("root is an element");

    assert_eq!(div.name(), "div");
    assert!(div.is("DIV"));
    assert_eq!(div.attributes().len(), 2);
    assert_eq!(div.attribute("CLASS"), Some("a b"));
    assert_eq!(div.attribute("disabled"), Some(""));
    assert!(div.has_attribute("disabled"));
    assert_eq!(div.attribute("missing"), None);
    assert_eq!(div.id(), None);

    let classes = div.classes();
    assert!(classes.contains("a"));
    assert!(classes.contains("b"));
    assert_eq!(classes.len(), 2);
}

#[test]
fn test_duplicate_attributes_keep_order_and_first_wins() {
    let root = element("p", &[("x", "1"), ("x", "2")], vec![]);
    let p = root.as_element().unwrap();
    let values: Vec<&str> = p.attributes().iter().map(|a| a.value.as_str()).collect();
    assert_eq!(values, ["1", "2"]);
    assert_eq!(p.attribute("x"), Some("1"));
}

#[test]
fn test_text_content_skips_comments() {
    assert_eq!(sample().text_content(), "xy");
    assert_eq!(Node::Whitespace.text_content(), "");
}

#[test]
fn test_non_elements_have_no_children() {
    assert!(text("x").children().is_empty());
    assert!(Node::Whitespace.children().is_empty());
}

// ========== traversal ==========

#[test]
fn test_walk_is_preorder_and_visits_every_node() {
    let root = sample();
    let mut kinds = Vec::new();
    walk(&root, |node| kinds.push(node.kind()));
    assert_eq!(
        kinds,
        [
            NodeKind::Element,
            NodeKind::Text,
            NodeKind::Comment,
            NodeKind::Whitespace,
            NodeKind::Element,
            NodeKind::Text,
        ]
    );
}

#[test]
fn test_find_first() {
    let root = sample();
    let span = find_first(&root, |n| n.as_element().is_some_and(|e| e.is("span")));
    assert_eq!(span.and_then(Node::as_element).and_then(Element::id), Some("s"));

    let first_text = find_first(&root, |n| n.as_text().is_some());
    assert_eq!(first_text.and_then(Node::as_text), Some("x"));

    assert!(find_first(&root, |n| n.as_element().is_some_and(|e| e.is("table"))).is_none());
}

#[test]
fn test_descendants_starts_at_root() {
    let root = text("only");
    let all: Vec<&Node> = root.descendants().collect();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].as_text(), Some("only"));
}

// ========== dump ==========

#[test]
fn test_dump_shape() {
    let expected = "#Element div\n  class=\"a b\"\n  disabled=\"\"\n\t#Text \"x\"\n\t#Comment \" c \"\n\t#Element span\n\t  id=\"s\"\n\t\t#Text \"y\"\n";
    assert_eq!(dump_tree(&sample()), expected);
}

#[test]
fn test_dump_is_deterministic() {
    assert_eq!(dump_tree(&sample()), dump_tree(&sample().clone()));
}

#[test]
fn test_dump_omits_whitespace() {
    assert_eq!(dump_tree(&Node::Whitespace), "");
}

// ========== serialization ==========

#[test]
fn test_json_shape() {
    let root = element("p", &[("a", "1")], vec![text("hi"), Node::Whitespace]);
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["type"], "element");
    assert_eq!(json["data"]["name"], "p");
    assert_eq!(json["data"]["attributes"][0]["name"], "a");
    assert_eq!(json["data"]["attributes"][0]["value"], "1");
    assert_eq!(json["data"]["children"][0]["type"], "text");
    assert_eq!(json["data"]["children"][0]["data"], "hi");
    assert_eq!(json["data"]["children"][1]["type"], "whitespace");
}

// ========== teardown ==========

#[test]
fn test_teardown_tolerates_none() {
    teardown(None);
    teardown(Some(sample()));
}

#[test]
fn test_teardown_of_deep_tree_does_not_overflow() {
    let mut node = text("leaf");
    for _ in 0..200_000 {
        node = element("div", &[], vec![node]);
    }
    teardown(Some(node));
}

#[test]
fn test_teardown_of_wide_tree() {
    let children = (0..100_000).map(|_| Node::Whitespace).collect();
    teardown(Some(element("ul", &[], children)));
}
