//! Node tree for the sliver parser.
//!
//! This crate provides the owned tree a parse produces: a [`Node`] sum type
//! with one payload shape per kind, [`Element`]s that own their attributes
//! and children, and the read-only collaborators that consume a finished
//! tree ([`traverse`] and [`dump`]).
//!
//! # Design
//!
//! The tree is a strict ownership hierarchy. Every child is owned by exactly
//! one parent `Vec`, so there are no shared or cyclic references and no node
//! can outlive its parent. Trees are built once by the parser and never
//! mutated afterwards, which is why [`Element`] exposes only accessors.
//!
//! Dropping a tree is iterative (see [`teardown`]), so neither very wide nor
//! very deep documents grow the call stack during release.

use std::collections::HashSet;
use std::mem;

use serde::Serialize;
use strum_macros::Display;

/// Debug rendering of a tree as indented lines.
pub mod dump;
/// Pre-order traversal and first-match search.
pub mod traverse;

pub use dump::{TreeDump, dump_tree, print_tree};
pub use traverse::{Descendants, find_first, walk};

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// See [`Node::Element`].
    Element,
    /// See [`Node::Text`].
    Text,
    /// See [`Node::Comment`].
    Comment,
    /// See [`Node::Whitespace`].
    Whitespace,
}

/// A single node in the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Node {
    /// A tag with its attributes and children.
    Element(Element),
    /// A run of character data with every whitespace run collapsed to a
    /// single space. Never empty.
    Text(String),
    /// The raw content between `<!--` and `-->`, unprocessed.
    Comment(String),
    /// A run of character data made only of whitespace. The content is
    /// discarded; the node just marks where the run was.
    Whitespace,
}

impl Node {
    /// The kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Text(_) => NodeKind::Text,
            Self::Comment(_) => NodeKind::Comment,
            Self::Whitespace => NodeKind::Whitespace,
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get the collapsed content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Get the raw content if this node is a comment.
    #[must_use]
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Self::Comment(content) => Some(content),
            _ => None,
        }
    }

    /// Returns true if this is an element.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns true if this is a whitespace marker.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Children of this node; empty for anything but an element.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => element.children(),
            _ => &[],
        }
    }

    /// Iterate over this node and every node below it, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// Concatenated content of every text node at or below this node.
    ///
    /// Whitespace nodes contribute nothing, since their content is not kept.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(Self::as_text).collect()
    }
}

/// An attribute on an element, in source order.
///
/// NOTE: an empty `value` means either a quoted empty value (`a=""`) or a
/// boolean attribute written without `=value` at all (`disabled`). The two
/// are indistinguishable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name, exactly as written.
    pub name: String,
    /// The attribute value, with quotes removed and no escape processing.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Element-specific data.
///
/// The tag name keeps the case it was written in; comparisons against it
/// should go through [`Element::is`], which ignores ASCII case.
/// Duplicate attribute names are kept, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element that takes ownership of its attributes and children.
    #[must_use]
    pub fn new(name: String, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    /// The tag name as written in the source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the tag name matches `tag`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    /// All attributes, in source order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Child nodes, in source order. Comments and whitespace are included.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Value of the first attribute named `name` (ASCII case-insensitive).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if any attribute is named `name` (ASCII case-insensitive).
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Returns the set of class names from the class attribute.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attribute("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }
}

impl Drop for Element {
    /// Release the subtree without recursing once per level or per sibling.
    ///
    /// Children are moved onto an explicit stack; each element popped from it
    /// hands its own children over before it is dropped, so by the time any
    /// element's `Drop` runs its child list is already empty.
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element(element) = &mut node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Release a whole tree, or a partially built one.
///
/// Accepts `None` so callers holding an optional root need no special case.
/// Ownership makes a second call impossible: the tree is consumed here.
pub fn teardown(root: Option<Node>) {
    drop(root);
}
