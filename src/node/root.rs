//! Root type and tree query utilities
//!
//! The root container for document trees, with query and traversal APIs.

use super::{Children, Element, Node};

// =============================================================================
// Root
// =============================================================================

/// Document root: the top-level ordered sequence of nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub children: Children,
}

impl Root {
    /// Create a root from children
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

impl Node {
    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over this node and all descendants (depth-first, pre-order)
    pub fn descendants(&self) -> DescendantIter<'_> {
        DescendantIter::new(self)
    }

    /// Find first node matching predicate (depth-first search)
    pub fn find<F>(&self, predicate: F) -> Option<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        self.descendants().find(|&n| predicate(n))
    }

    /// Find all elements with the given tag
    pub fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants()
            .filter_map(Node::as_element)
            .filter(move |e| e.tag == tag)
    }

    /// Count nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

// =============================================================================
// DescendantIter - depth-first traversal
// =============================================================================

/// Depth-first iterator over a subtree
pub struct DescendantIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> DescendantIter<'a> {
    fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for DescendantIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
