//! Recursive-descent parser building a [`sliver_dom::Node`] tree.
//!
//! The grammar is split over several files, each adding an `impl Parser`
//! block:
//! - `document` - parser state, options, node dispatch, document entry point
//! - `text` - character data and whitespace collapsing
//! - `comment` - `<!-- ... -->`
//! - `element` - tags, attributes, raw-text bodies, children, end tags

mod comment;
/// Parser state, configuration and the document entry point.
pub mod document;
mod element;
/// Element names with special parsing rules.
pub mod tags;
mod text;

pub use document::{DEFAULT_MAX_DEPTH, Parser, parse_document};
pub use tags::{RawTextElement, VoidElement};
