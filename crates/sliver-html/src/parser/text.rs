use sliver_dom::Node;

use super::document::Parser;
use crate::scanner::is_space;

impl Parser<'_> {
    /// Parse a run of character data up to the next `<` or end of input.
    ///
    /// Must only be called when at least one such character remains. A run
    /// made only of whitespace becomes [`Node::Whitespace`]; anything else
    /// becomes [`Node::Text`] with whitespace collapsed.
    pub(super) fn parse_text(&mut self) -> Node {
        let rest = self.cursor.rest();
        let len = rest.find('<').unwrap_or(rest.len());
        debug_assert!(len > 0, "parse_text called with no character data");
        let run = &rest[..len];
        self.cursor.advance(len);

        collapse_whitespace(run).map_or(Node::Whitespace, Node::Text)
    }
}

/// Collapse every maximal whitespace run in `run` to a single space.
///
/// Returns `None` if `run` is entirely whitespace. The output length is
/// known after one counting pass, so the buffer is allocated exactly once.
fn collapse_whitespace(run: &str) -> Option<String> {
    // Bytes saved by collapsing: k - 1 for each whitespace run of length k.
    // Whitespace is ASCII, so characters and bytes agree here.
    let mut saved = 0;
    let mut all_space = true;
    let mut in_space = false;
    for c in run.chars() {
        if is_space(c) {
            if in_space {
                saved += 1;
            }
            in_space = true;
        } else {
            all_space = false;
            in_space = false;
        }
    }
    if all_space {
        return None;
    }

    let mut content = String::with_capacity(run.len() - saved);
    in_space = false;
    for c in run.chars() {
        if is_space(c) {
            if !in_space {
                content.push(' ');
            }
            in_space = true;
        } else {
            content.push(c);
            in_space = false;
        }
    }
    debug_assert_eq!(content.len(), run.len() - saved);
    Some(content)
}
