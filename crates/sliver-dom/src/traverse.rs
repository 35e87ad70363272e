//! Read-only traversal over a finished tree.
//!
//! All traversal is pre-order (a parent before its children, children in
//! source order) and uses an explicit stack, so the depth of the document
//! never translates into call-stack depth.

use crate::Node;

/// Pre-order iterator over a node and everything below it.
///
/// Created by [`Node::descendants`]. The starting node is yielded first.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    /// Start a traversal at `root`.
    #[must_use]
    pub fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Invoke `visit` once per node in the tree, in pre-order.
///
/// Comment and whitespace nodes are visited too.
pub fn walk<'a, F>(root: &'a Node, mut visit: F)
where
    F: FnMut(&'a Node),
{
    for node in root.descendants() {
        visit(node);
    }
}

/// Return the first node, in pre-order, that satisfies `predicate`.
pub fn find_first<'a, P>(root: &'a Node, mut predicate: P) -> Option<&'a Node>
where
    P: FnMut(&Node) -> bool,
{
    root.descendants().find(|node| predicate(*node))
}
