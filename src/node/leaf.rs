//! Leaf node types: expressions and doctype declarations

use compact_str::CompactString;

/// Embedded code fragment (`{...}` in MDX) with its attached comments.
///
/// Only the comment text is ever inspected; the code itself is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    /// Source of the fragment, without the surrounding braces
    pub value: String,
    /// Text of each attached comment, without `/*`, `*/` or `//`
    pub comments: Vec<String>,
}

impl Expression {
    /// Create an expression without comments
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comments: Vec::new(),
        }
    }

    /// Create a comment-only expression, e.g. `{/* text */}`
    pub fn comment(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: format!("/*{text}*/"),
            comments: vec![text],
        }
    }

    /// Attach a comment (builder)
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        self.comments.push(text.into());
        self
    }
}

/// Document type declaration (`<!doctype html>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    pub name: CompactString,
}

impl Doctype {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self { name: name.into() }
    }

    pub fn html() -> Self {
        Self::new("html")
    }
}
