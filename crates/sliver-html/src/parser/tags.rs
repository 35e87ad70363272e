//! Element names the grammar treats specially.

use strum_macros::{EnumString, IntoStaticStr};

/// Elements that never have children or a closing tag.
///
/// Parsing a name is ASCII case-insensitive, so `"BR".parse::<VoidElement>()`
/// succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoidElement {
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<br>`
    Br,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<hr>`
    Hr,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<param>`
    Param,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

impl VoidElement {
    /// Returns true if `name` is a void element name, ignoring ASCII case.
    #[must_use]
    pub fn matches(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}

/// Elements whose body is skipped verbatim up to the matching end tag.
///
/// The body is not kept in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RawTextElement {
    /// `<script>`
    Script,
    /// `<style>`
    Style,
}

impl RawTextElement {
    /// The lowercase tag name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
