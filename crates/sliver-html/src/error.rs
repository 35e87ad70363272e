//! Parse failures and non-fatal parse issues.
//!
//! Every malformed-input condition surfaces as a [`ParseError`] carrying the
//! byte offset where it was detected. Nothing in the parser panics or aborts
//! on bad input.

use strum_macros::Display;
use thiserror::Error;

/// Why a parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The element parser was entered somewhere other than a `<`.
    #[error("expected '<' to open a tag")]
    MissingTagOpen,

    /// `<` was not followed by a tag name.
    #[error("expected a tag name after '<'")]
    MissingTagName,

    /// An attribute started with a character that cannot begin a name.
    #[error("expected an attribute name")]
    MissingAttributeName,

    /// A quoted attribute value reached end of input without its closing
    /// quote.
    #[error("attribute value opened with {quote} is never closed")]
    UnterminatedAttributeValue {
        /// The quote character that opened the value.
        quote: char,
    },

    /// A start or end tag did not end with `>`.
    #[error("expected '>' to close the tag, found {found:?}")]
    MissingTagClose {
        /// The character found instead.
        found: char,
    },

    /// An end tag named a different element than the one being closed.
    #[error("closing tag </{found}> does not match <{expected}>")]
    MismatchedClosingTag {
        /// The name of the open element.
        expected: String,
        /// The name written in the closing tag (may be empty).
        found: String,
    },

    /// Input ran out inside a construct that needs a terminator.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: String,
    },

    /// Only a doctype, comments, or whitespace were found.
    #[error("document contains no element")]
    EmptyDocument,

    /// The first structural node was text, and text roots are disabled.
    #[error("document root is a bare text node")]
    TextRoot,

    /// Elements were nested deeper than the configured limit.
    #[error("elements nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },

    /// Non-whitespace content follows the document root.
    #[error("unexpected content after the document root")]
    TrailingInput,
}

impl ParseErrorKind {
    /// Shorthand for [`ParseErrorKind::UnexpectedEof`].
    #[must_use]
    pub fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Process exit status for a driver reporting this failure: 2 for
    /// trailing input, 1 for every structural failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::TrailingInput => 2,
            _ => 1,
        }
    }
}

/// A parse failure with its location in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{line}:{column}] {kind}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the input where the problem was detected.
    pub offset: usize,
    /// 1-based line of `offset`.
    pub line: usize,
    /// 1-based column of `offset`, counted in characters.
    pub column: usize,
}

impl ParseError {
    /// Create an error at `offset`, deriving line and column from `source`.
    #[must_use]
    pub fn new(kind: ParseErrorKind, source: &str, offset: usize) -> Self {
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// Returns true if the document itself parsed but was followed by more
    /// content.
    #[must_use]
    pub const fn is_trailing_input(&self) -> bool {
        matches!(self.kind, ParseErrorKind::TrailingInput)
    }

    /// Returns true for every failure inside the markup structure, i.e.
    /// anything except trailing input.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        !self.is_trailing_input()
    }
}

/// The category of a non-fatal [`ParseIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// A doctype declaration was skipped without validation.
    #[strum(serialize = "doctype-skipped")]
    DoctypeSkipped,
    /// A comment before the document root was dropped.
    #[strum(serialize = "top-level-comment-discarded")]
    TopLevelCommentDiscarded,
}

/// A lenient recovery the parser made instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What kind of recovery this was.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Byte offset where the construct began.
    pub offset: usize,
}
