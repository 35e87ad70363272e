use sliver_dom::Node;

use super::document::Parser;

pub(super) const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

impl Parser<'_> {
    /// Parse `<!-- ... -->` with the cursor exactly at `<!--`.
    ///
    /// The content is everything up to the first `-->`; comments do not
    /// nest. A missing `-->` is not an error here: the content runs to end
    /// of input. Whatever encloses the comment then fails for lack of input,
    /// so an unterminated comment never survives into a finished tree.
    ///
    /// NOTE: unlike every other node, a comment eats the whitespace that
    /// follows it. The document entry point and element children both see
    /// the node after that whitespace.
    pub(super) fn parse_comment(&mut self) -> Node {
        self.cursor.advance(COMMENT_OPEN.len());

        let rest = self.cursor.rest();
        let end = self.cursor.find(COMMENT_CLOSE);
        let content = end.map_or(rest, |end| &rest[..end]);
        self.cursor
            .advance(end.map_or(rest.len(), |end| end + COMMENT_CLOSE.len()));

        self.cursor.skip_space();
        Node::Comment(content.to_string())
    }
}
