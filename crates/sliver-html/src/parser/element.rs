use sliver_dom::{Attribute, Element, Node};

use super::comment::COMMENT_OPEN;
use super::document::Parser;
use super::tags::{RawTextElement, VoidElement};
use crate::error::{ParseError, ParseErrorKind};
use crate::scanner::is_space;

const END_TAG_OPEN: &str = "</";
const SELF_CLOSE: &str = "/>";

/// Tag names are ASCII alphanumerics and hyphens.
const fn is_tag_name_char(c: char) -> bool {
    c == '-' || c.is_ascii_alphanumeric()
}

/// Attribute names run until `/`, `>`, `=` or whitespace.
const fn is_attribute_name_char(c: char) -> bool {
    !matches!(c, '/' | '>' | '=') && !is_space(c)
}

impl<'a> Parser<'a> {
    /// Parse an element (or a comment) with the cursor at `<`.
    ///
    /// A tag is self-closing if its name is a [`VoidElement`] or it ends
    /// with `/>`. Otherwise the body is parsed as child nodes, except for
    /// [`RawTextElement`]s whose body is skipped, and must be followed by an
    /// end tag with the same name (ASCII case-insensitive).
    ///
    /// Attributes and children collected so far are owned by locals, so on
    /// any error they are released as the `?` unwinds.
    pub(super) fn parse_element(&mut self) -> Result<Node, ParseError> {
        if self.cursor.starts_with(COMMENT_OPEN) {
            return Ok(self.parse_comment());
        }

        if !self.cursor.eat('<') {
            return Err(self.error(ParseErrorKind::MissingTagOpen));
        }
        self.cursor.skip_space();
        let Some(name) = self.cursor.scan_while(is_tag_name_char) else {
            return Err(self.malformed(ParseErrorKind::MissingTagName, "a tag name"));
        };
        self.cursor.skip_space();

        let attributes = self.parse_attributes()?;

        let self_closing = self.cursor.eat('/') || VoidElement::matches(name);
        self.expect_tag_close()?;

        let name = name.to_string();
        if self_closing {
            return Ok(Node::Element(Element::new(name, attributes, Vec::new())));
        }

        if let Ok(raw) = name.parse::<RawTextElement>() {
            self.skip_raw_text(raw);
        }

        self.enter()?;
        let children = self.parse_children(&name);
        self.leave();
        let children = children?;

        self.parse_end_tag(&name)?;
        Ok(Node::Element(Element::new(name, attributes, children)))
    }

    /// Parse attributes until the cursor reaches `>` or `/`.
    ///
    /// An attribute with no `=` is recorded with an empty value.
    fn parse_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        loop {
            match self.cursor.peek() {
                None => return Err(self.error(ParseErrorKind::eof("'>' to close the tag"))),
                Some('>' | '/') => return Ok(attributes),
                Some(_) => {}
            }

            let Some(name) = self.cursor.scan_while(is_attribute_name_char) else {
                return Err(self.error(ParseErrorKind::MissingAttributeName));
            };
            self.cursor.skip_space();

            if !self.cursor.eat('=') {
                attributes.push(Attribute::new(name.to_string(), String::new()));
                continue;
            }
            self.cursor.skip_space();

            let value = self.parse_attribute_value()?;
            attributes.push(Attribute::new(name.to_string(), value.to_string()));
            self.cursor.skip_space();
        }
    }

    /// Parse an attribute value after `=`.
    ///
    /// A value opened by `"` or `'` runs to the same quote, with no escapes.
    /// An unquoted value runs to whitespace, `>`, or `/>`, and may be empty.
    fn parse_attribute_value(&mut self) -> Result<&'a str, ParseError> {
        let rest = self.cursor.rest();
        match self.cursor.peek() {
            None => Err(self.error(ParseErrorKind::eof("an attribute value"))),
            Some(quote @ ('"' | '\'')) => {
                let start = self.cursor.position();
                let Some(end) = rest[1..].find(quote) else {
                    return Err(self.error_at(
                        ParseErrorKind::UnterminatedAttributeValue { quote },
                        start,
                    ));
                };
                self.cursor.advance(end + 2);
                Ok(&rest[1..=end])
            }
            Some(_) => {
                let len = rest
                    .char_indices()
                    .find(|&(i, c)| is_space(c) || c == '>' || rest[i..].starts_with(SELF_CLOSE))
                    .map_or(rest.len(), |(i, _)| i);
                self.cursor.advance(len);
                Ok(&rest[..len])
            }
        }
    }

    /// Consume the `>` that ends a start tag.
    fn expect_tag_close(&mut self) -> Result<(), ParseError> {
        match self.cursor.peek() {
            Some('>') => {
                self.cursor.advance(1);
                Ok(())
            }
            Some(found) => Err(self.error(ParseErrorKind::MissingTagClose { found })),
            None => Err(self.error(ParseErrorKind::eof("'>' to close the tag"))),
        }
    }

    /// Skip a script or style body up to its end tag, which is left for
    /// [`Parser::parse_end_tag`]. Without one, the cursor moves to end of
    /// input and the missing end tag is reported by the caller.
    fn skip_raw_text(&mut self, raw: RawTextElement) {
        let end_tag = format!("{END_TAG_OPEN}{}", raw.name());
        let len = self
            .cursor
            .find_ignore_ascii_case(&end_tag)
            .unwrap_or_else(|| self.cursor.rest().len());
        self.cursor.advance(len);
    }

    /// Parse child nodes until the cursor reaches `</`.
    fn parse_children(&mut self, name: &str) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();
        while !self.cursor.starts_with(END_TAG_OPEN) {
            if self.cursor.is_at_end() {
                return Err(self.error(ParseErrorKind::eof(format!("</{name}>"))));
            }
            children.push(self.parse_node()?);
        }
        Ok(children)
    }

    /// Parse `</name>`, allowing whitespace around the name.
    fn parse_end_tag(&mut self, name: &str) -> Result<(), ParseError> {
        let start = self.cursor.position();
        self.cursor.advance(END_TAG_OPEN.len());
        self.cursor.skip_space();

        let found = self.cursor.scan_while(is_tag_name_char).unwrap_or_default();
        if !found.eq_ignore_ascii_case(name) {
            if found.is_empty() && self.cursor.is_at_end() {
                return Err(self.error(ParseErrorKind::eof(format!("</{name}>"))));
            }
            return Err(self.error_at(
                ParseErrorKind::MismatchedClosingTag {
                    expected: name.to_string(),
                    found: found.to_string(),
                },
                start,
            ));
        }

        self.cursor.skip_space();
        match self.cursor.peek() {
            Some('>') => {
                self.cursor.advance(1);
                Ok(())
            }
            Some(found) => Err(self.error(ParseErrorKind::MissingTagClose { found })),
            None => Err(self.error(ParseErrorKind::eof("'>' to close the end tag"))),
        }
    }

    /// A malformed-tag error, or an end-of-input error if that is why the
    /// construct is missing.
    fn malformed(&self, kind: ParseErrorKind, expected: &str) -> ParseError {
        if self.cursor.is_at_end() {
            self.error(ParseErrorKind::eof(expected))
        } else {
            self.error(kind)
        }
    }
}
