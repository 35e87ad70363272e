//! Scanning primitives over the input buffer.
//!
//! A [`Cursor`] is a byte position into a borrowed `&str`. Every marker the
//! grammar looks for (`<`, `>`, `/`, `=`, quotes, whitespace) is ASCII, so
//! positions produced by these primitives always fall on `char` boundaries.

/// ASCII whitespace as the grammar understands it.
///
/// Space, tab, line feed, vertical tab, form feed and carriage return. This
/// is the C `isspace` set, which is one wider than the WHATWG set (it adds
/// vertical tab).
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// A read-only position in the input being parsed.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The whole input this cursor walks over.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Everything from the current position to the end of input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The character at the current position, if any.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Check if the next few characters match `target` exactly.
    #[must_use]
    pub fn starts_with(&self, target: &str) -> bool {
        self.rest().starts_with(target)
    }

    /// Check if the next few characters match `target`, ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_ascii_case(&self, target: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..target.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(target.as_bytes()))
    }

    /// Byte distance from the current position to the first `needle`.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle)
    }

    /// Like [`Cursor::find`], ignoring ASCII case. `needle` must be ASCII.
    #[must_use]
    pub fn find_ignore_ascii_case(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.rest()
            .as_bytes()
            .windows(needle.len())
            .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
    }

    /// Move forward by `len` bytes, stopping at the end of input.
    ///
    /// Callers only pass lengths of ASCII markers or distances returned by
    /// this cursor, so the new position is always a `char` boundary.
    pub fn advance(&mut self, len: usize) {
        self.pos = self.pos.saturating_add(len).min(self.input.len());
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Advance past a maximal run of whitespace. Never fails; a no-op when
    /// the current character is not whitespace.
    pub fn skip_space(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(is_space);
        self.advance(rest.len() - trimmed.len());
    }

    /// Capture the maximal run of characters satisfying `predicate`.
    ///
    /// Returns `None` (and leaves the cursor alone) when the run is empty;
    /// otherwise returns the run and moves past it.
    pub fn scan_while<P>(&mut self, mut predicate: P) -> Option<&'a str>
    where
        P: FnMut(char) -> bool,
    {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(i, _)| i);
        if len == 0 {
            return None;
        }
        self.advance(len);
        Some(&rest[..len])
    }
}
