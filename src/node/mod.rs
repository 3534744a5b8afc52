//! Node types for markup/MDX document trees.
//!
//! This module provides the `Node` sum type and its payloads, shaped after
//! the hast/MDX trees a markdown pipeline hands to its plugins:
//!
//! - `Root` - document root (unnamed container)
//! - `Element` - plain element with a tag name and properties
//! - `Component` - MDX JSX flow element (component reference)
//! - `Text` - text content
//! - `Expression` - embedded code fragment with attached comments
//! - `Doctype` / `Esm` - preamble nodes (doctype, module imports)
//!
//! # Named containers
//!
//! Elements and components both carry a name and children. The split engine
//! only ever asks for that shape through [`Node::as_named_container`].

mod element;
mod esm;
mod leaf;
mod root;
mod text;

pub use element::{Component, Element};
pub use esm::{Esm, ImportDeclaration, ImportSpecifier};
pub use leaf::{Doctype, Expression};
pub use root::{DescendantIter, Root};
pub use text::Text;

use smallvec::SmallVec;

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

/// Node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root(Box<Root>),
    Element(Box<Element>),
    Component(Box<Component>),
    Text(Text),
    Expression(Expression),
    Doctype(Doctype),
    Esm(Esm),
    /// HTML comment, passed through unchanged
    Comment(String),
    /// Raw markup, passed through unchanged
    Raw(String),
}

/// Borrowed view of a container that has a name.
#[derive(Debug, Clone, Copy)]
pub struct NamedContainer<'a> {
    pub name: &'a str,
    pub children: &'a [Node],
}

impl Node {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_node_accessors!(root, element, component, text, expression, doctype, esm);

    /// Create a root node from children.
    pub fn root(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Root(Box::new(Root::new(children)))
    }

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text::new(value))
    }

    /// Node kind for debugging output.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Component(_) => "component",
            Node::Text(_) => "text",
            Node::Expression(_) => "expression",
            Node::Doctype(_) => "doctype",
            Node::Esm(_) => "esm",
            Node::Comment(_) => "comment",
            Node::Raw(_) => "raw",
        }
    }

    /// Name and children of an element or component.
    ///
    /// Anonymous components (fragments) report an empty name.
    pub fn as_named_container(&self) -> Option<NamedContainer<'_>> {
        match self {
            Node::Element(e) => Some(NamedContainer { name: &e.tag, children: &e.children }),
            Node::Component(c) => Some(NamedContainer {
                name: c.name.as_deref().unwrap_or(""),
                children: &c.children,
            }),
            _ => None,
        }
    }

    /// Check if this node is a named container called `name`.
    pub fn has_name(&self, name: &str) -> bool {
        self.as_named_container().is_some_and(|c| c.name == name)
    }

    /// Children of any container node.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Root(r) => Some(&r.children),
            Node::Element(e) => Some(&e.children),
            Node::Component(c) => Some(&c.children),
            _ => None,
        }
    }

    /// Mutable children of any container node.
    pub fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Root(r) => Some(&mut r.children),
            Node::Element(e) => Some(&mut e.children),
            Node::Component(c) => Some(&mut c.children),
            _ => None,
        }
    }

    /// Check if this node can hold children.
    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    /// Text node whose value is empty or whitespace only.
    pub fn is_whitespace(&self) -> bool {
        self.as_text().is_some_and(Text::is_whitespace)
    }

    /// Doctype or module preamble; never placed inside a wrapper.
    pub fn is_preamble(&self) -> bool {
        matches!(self, Node::Doctype(_) | Node::Esm(_))
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Component> for Node {
    fn from(comp: Component) -> Self {
        Node::Component(Box::new(comp))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl From<Doctype> for Node {
    fn from(doctype: Doctype) -> Self {
        Node::Doctype(doctype)
    }
}

impl From<Esm> for Node {
    fn from(esm: Esm) -> Self {
        Node::Esm(esm)
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        Node::Root(Box::new(root))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_container_element() {
        let node: Node = Element::new("hr").into();
        let named = node.as_named_container().unwrap();
        assert_eq!(named.name, "hr");
        assert!(named.children.is_empty());
        assert!(node.has_name("hr"));
        assert!(!node.has_name("Hr"));
    }

    #[test]
    fn test_named_container_component() {
        let node: Node = Component::new("Custom").text("inside").into();
        let named = node.as_named_container().unwrap();
        assert_eq!(named.name, "Custom");
        assert_eq!(named.children.len(), 1);

        let fragment: Node = Component::fragment().into();
        assert_eq!(fragment.as_named_container().unwrap().name, "");
    }

    #[test]
    fn test_root_is_unnamed_container() {
        let root = Node::root([Node::text("a")]);
        assert!(root.is_container());
        assert!(root.as_named_container().is_none());
        assert_eq!(root.children().unwrap().len(), 1);
    }

    #[test]
    fn test_leaf_predicates() {
        assert!(Node::text("\n").is_whitespace());
        assert!(Node::text("").is_whitespace());
        assert!(!Node::text(" a ").is_whitespace());
        assert!(Node::from(Doctype::html()).is_preamble());
        assert!(Node::from(Esm::new("export const a = 1")).is_preamble());
        assert!(!Node::Comment("x".into()).is_preamble());
        assert!(!Node::from(Element::new("p")).is_whitespace());
    }

    #[test]
    fn test_accessors() {
        let mut node = Node::text("hello");
        assert!(node.is_text());
        assert!(!node.is_element());
        node.as_text_mut().unwrap().value.push('!');
        assert_eq!(node.as_text().unwrap().value, "hello!");
        assert_eq!(node.kind(), "text");
    }

    #[test]
    fn test_children_macro() {
        let children = children![Element::new("p"), "\n", Doctype::html()];
        assert_eq!(children.len(), 3);
        assert!(children[1].is_whitespace());
        assert!(children[2].is_doctype());
    }

    // Recursive variants are boxed, so a node stays small enough to inline
    // eight of them in `Children`.
    static_assertions::const_assert!(std::mem::size_of::<Node>() <= 64);

    #[test]
    fn test_root_variant_is_boxed() {
        let root = Node::root([Node::text("a")]);
        assert_eq!(Node::from(Root::new([Node::text("a")])), root);
        assert!(matches!(&root, Node::Root(boxed) if boxed.children.len() == 1));
        assert_eq!(root.children().map(|c| c.len()), Some(1));
    }
}
