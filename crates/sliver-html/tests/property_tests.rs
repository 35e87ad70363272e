//! Property tests for the parser.

use quickcheck_macros::quickcheck;
use sliver_dom::{Node, dump_tree};
use sliver_html::{Parser, is_space, parse_document};

#[quickcheck]
fn prop_never_panics(input: String) -> bool {
    let _ = Parser::new(&input).with_text_root(true).run();
    true
}

#[quickcheck]
fn prop_never_panics_inside_element(input: String) -> bool {
    let _ = parse_document(&format!("<div a=1 b>{input}</div>"));
    true
}

#[quickcheck]
fn prop_text_collapses_whitespace(raw: String) -> bool {
    let body: String = raw.chars().filter(|&c| c != '<').collect();
    let root = match parse_document(&format!("<p>{body}</p>")) {
        Ok(root) => root,
        Err(_) => return false,
    };
    let children = root.children();

    if body.is_empty() {
        return children.is_empty();
    }
    if body.chars().all(is_space) {
        return children == [Node::Whitespace];
    }
    let [Node::Text(text)] = children else {
        return false;
    };
    let squeezed: String = body.chars().filter(|&c| !is_space(c)).collect();
    let kept: String = text.chars().filter(|&c| c != ' ').collect();
    !text.contains("  ") && !text.chars().any(|c| is_space(c) && c != ' ') && squeezed == kept
}

#[quickcheck]
fn prop_parse_is_deterministic(input: String) -> bool {
    let parse = || Parser::new(&input).with_text_root(true).run();
    match (parse(), parse()) {
        (Ok(a), Ok(b)) => dump_tree(&a) == dump_tree(&b) && a == b,
        (Err(a), Err(b)) => a == b,
        _ => false,
    }
}
