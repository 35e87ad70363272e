use sliver_dom::Node;

use crate::error::{IssueKind, ParseError, ParseErrorKind, ParseIssue};
use crate::scanner::Cursor;

/// Element nesting allowed before the parser gives up.
///
/// Each open element costs one level of recursion, so this bounds the stack
/// used by a parse.
pub const DEFAULT_MAX_DEPTH: usize = 256;

const DOCTYPE_OPEN: &str = "<!doctype";

/// Parses one complete buffer into a single root node.
///
/// A parser is used once: [`Parser::run`] consumes it. All state lives in
/// the parser value and the tree it returns, so separate parses never
/// interact.
///
/// ```
/// use sliver_html::Parser;
///
/// let root = Parser::new("<p class=\"a\">hi</p>").run().unwrap();
/// let p = root.as_element().unwrap();
/// assert_eq!(p.name(), "p");
/// assert_eq!(p.attribute("class"), Some("a"));
/// assert_eq!(root.text_content(), "hi");
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,

    /// Maximum element nesting, see [`DEFAULT_MAX_DEPTH`].
    max_depth: usize,

    /// Current element nesting.
    depth: usize,

    /// Whether a bare text run may serve as the document root.
    allow_text_root: bool,

    /// Lenient recoveries made so far.
    issues: Vec<ParseIssue>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `input` with default options.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            allow_text_root: false,
            issues: Vec::new(),
        }
    }

    /// Limit element nesting to `max_depth` levels.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Accept a document whose first structural node is text, e.g. `"hello"`.
    ///
    /// Off by default: such input is rejected with
    /// [`ParseErrorKind::TextRoot`].
    #[must_use]
    pub const fn with_text_root(mut self, allow: bool) -> Self {
        self.allow_text_root = allow;
        self
    }

    /// Parse the document and return its root node.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed markup, an empty document, a
    /// rejected text root, or content after the root.
    pub fn run(self) -> Result<Node, ParseError> {
        self.run_with_issues().map(|(root, _)| root)
    }

    /// Parse the document and return its root node together with every
    /// lenient recovery made along the way.
    ///
    /// Skips leading whitespace and an optional doctype, then discards
    /// comments and whitespace until the first element (or text, if
    /// enabled) which becomes the root. Anything but whitespace after it is
    /// an error.
    ///
    /// # Errors
    ///
    /// See [`Parser::run`].
    pub fn run_with_issues(mut self) -> Result<(Node, Vec<ParseIssue>), ParseError> {
        self.cursor.skip_space();
        self.skip_doctype();

        let root = loop {
            if self.cursor.is_at_end() {
                return Err(self.error(ParseErrorKind::EmptyDocument));
            }
            let start = self.cursor.position();
            match self.parse_node()? {
                Node::Comment(_) => self.issue(
                    IssueKind::TopLevelCommentDiscarded,
                    "comment before the document root was discarded",
                    start,
                ),
                Node::Whitespace => {}
                Node::Text(_) if !self.allow_text_root => {
                    return Err(self.error_at(ParseErrorKind::TextRoot, start));
                }
                node => break node,
            }
        };

        self.cursor.skip_space();
        if !self.cursor.is_at_end() {
            return Err(self.error(ParseErrorKind::TrailingInput));
        }
        Ok((root, self.issues))
    }

    /// Skip `<!doctype ...>` (any case) through the next `>`, without looking
    /// at what is inside.
    fn skip_doctype(&mut self) {
        if !self.cursor.starts_with_ignore_ascii_case(DOCTYPE_OPEN) {
            return;
        }
        let start = self.cursor.position();
        let len = self
            .cursor
            .find(">")
            .map_or_else(|| self.cursor.rest().len(), |end| end + 1);
        self.cursor.advance(len);
        self.issue(IssueKind::DoctypeSkipped, "doctype skipped", start);
    }

    /// Parse whatever node starts at the cursor.
    ///
    /// A `<` starts an element (or a comment); anything else starts text.
    /// Every successful call consumes at least one character.
    pub(super) fn parse_node(&mut self) -> Result<Node, ParseError> {
        match self.cursor.peek() {
            None => Err(self.error(ParseErrorKind::eof("a node"))),
            Some('<') => self.parse_element(),
            Some(_) => Ok(self.parse_text()),
        }
    }

    /// Enter one more level of element nesting.
    pub(super) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ParseErrorKind::NestingTooDeep {
                limit: self.max_depth,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a level entered with [`Parser::enter`].
    pub(super) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Build an error at the cursor.
    pub(super) fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.cursor.position())
    }

    /// Build an error at a given byte offset.
    pub(super) fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.cursor.input(), offset)
    }

    /// Record a lenient recovery.
    pub(super) fn issue(&mut self, kind: IssueKind, message: &str, offset: usize) {
        self.issues.push(ParseIssue {
            kind,
            message: message.to_string(),
            offset,
        });
    }
}

/// Parse `input` with default options.
///
/// # Errors
///
/// See [`Parser::run`].
pub fn parse_document(input: &str) -> Result<Node, ParseError> {
    Parser::new(input).run()
}
