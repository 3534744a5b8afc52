//! Element and Component types
//!
//! The container building blocks of the tree. `Element` is a plain markup
//! element (`<p>`, `<hr>`); `Component` is an MDX JSX flow element
//! (`<Custom prop="x">`).

use compact_str::CompactString;

use crate::attr::{PropValue, Props, PropsExt};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// Markup element with properties and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name
    pub tag: CompactString,
    /// Element properties
    pub props: Props,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element without properties or children
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
            children: Children::new(),
        }
    }

    /// Create an element with the given properties and children
    pub fn with_parts(tag: impl Into<CompactString>, props: Props, children: Children) -> Self {
        Self {
            tag: tag.into(),
            props,
            children,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a property (builder)
    pub fn prop(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.props.set_prop(name, value);
        self
    }

    /// Append a child node (builder)
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes (builder)
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child (builder)
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::new(value)));
        self
    }
}

// =============================================================================
// Component
// =============================================================================

/// MDX JSX flow element (component reference)
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Component name; `None` for fragments
    pub name: Option<CompactString>,
    /// JSX attributes
    pub attributes: Props,
    /// Child nodes
    pub children: Children,
}

impl Component {
    /// Create a named component
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: Props::new(),
            children: Children::new(),
        }
    }

    /// Create an anonymous fragment (`<>...</>`)
    pub fn fragment() -> Self {
        Self {
            name: None,
            attributes: Props::new(),
            children: Children::new(),
        }
    }

    /// Add an attribute (builder)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.attributes.set_prop(name, value);
        self
    }

    /// Append a child node (builder)
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes (builder)
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child (builder)
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::new(value)));
        self
    }
}
