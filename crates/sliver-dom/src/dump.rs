//! Indented text rendering of a tree, one line per node.
//!
//! ```text
//! #Element div
//!   class="a"
//!   disabled=""
//! 	#Text "x"
//! 	#Comment " note "
//! ```
//!
//! Each nesting level adds one tab. Attributes are listed under their
//! element, indented by two spaces, in source order. Whitespace nodes are
//! omitted entirely. The output depends only on the tree.

use std::fmt;

use crate::Node;

/// A [`Display`](fmt::Display) adapter that renders a tree as indented lines.
#[derive(Debug, Clone, Copy)]
pub struct TreeDump<'a>(pub &'a Node);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node, usize)> = vec![(self.0, 0)];
        while let Some((node, depth)) = stack.pop() {
            let indent = "\t".repeat(depth);
            match node {
                Node::Element(element) => {
                    writeln!(f, "{indent}#Element {}", element.name())?;
                    for attr in element.attributes() {
                        writeln!(f, "{indent}  {}=\"{}\"", attr.name, attr.value)?;
                    }
                    stack.extend(element.children().iter().rev().map(|c| (c, depth + 1)));
                }
                Node::Text(content) => writeln!(f, "{indent}#Text \"{content}\"")?,
                Node::Comment(content) => writeln!(f, "{indent}#Comment \"{content}\"")?,
                Node::Whitespace => {}
            }
        }
        Ok(())
    }
}

/// Render a tree to a string.
#[must_use]
pub fn dump_tree(root: &Node) -> String {
    TreeDump(root).to_string()
}

/// Print a tree to stdout for debugging.
pub fn print_tree(root: &Node) {
    print!("{}", TreeDump(root));
}
