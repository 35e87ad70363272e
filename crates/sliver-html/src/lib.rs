//! HTML markup parser for the sliver node tree.
//!
//! # Scope
//!
//! This crate implements a small, non-validating recursive-descent parser:
//! - **Scanning primitives** ([`scanner`]) - whitespace skipping and
//!   predicate-bounded capture over a cursor
//! - **Parser** ([`parser`]) - text with whitespace collapsing, comments,
//!   elements with attributes, void and self-closing tags, script/style
//!   bodies, and the document entry point
//! - **Errors** ([`error`]) - every malformed input is a [`ParseError`]
//!   with a byte offset; lenient recoveries are reported as [`ParseIssue`]s
//!
//! # Not Implemented
//!
//! - Character reference decoding (`&amp;` stays as written)
//! - Implied tags and the WHATWG error-recovery algorithm
//! - Encoding sniffing, streaming input
//!
//! # Example
//!
//! ```
//! use sliver_html::{ParseErrorKind, parse_document};
//!
//! let root = parse_document("<!-- note --><p>ok</p>").unwrap();
//! assert!(root.as_element().is_some_and(|p| p.is("p")));
//!
//! let err = parse_document("<p>a</p><p>b</p>").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::TrailingInput);
//! ```

/// Parse errors and parse issues.
pub mod error;
/// Recursive-descent parser.
pub mod parser;
/// Cursor and character-class primitives.
pub mod scanner;

pub use error::{IssueKind, ParseError, ParseErrorKind, ParseIssue};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, RawTextElement, VoidElement, parse_document};
pub use scanner::{Cursor, is_space};
