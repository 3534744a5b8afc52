//! Depth-first tree walker with enter/leave callbacks.
//!
//! The walker visits every node once, calling [`Visitor::enter`] before a
//! node's children and [`Visitor::leave`] after them. Callbacks receive a
//! [`Visit`] handle that exposes the current position and the mutation
//! capabilities:
//!
//! - `replace(node)` - substitute the current node in place
//! - `remove()` - delete the current node once the callback returns
//! - `skip()` - (in `enter`) do not descend into the current node
//!
//! A removed or skipped node receives no `leave` call. Removal keeps the
//! walker at the same index, so the next sibling is visited next.
//!
//! # Example
//!
//! ```ignore
//! struct DropComments;
//!
//! impl Visitor for DropComments {
//!     fn enter(&mut self, cx: &mut Visit<'_>) {
//!         if matches!(cx.node(), Node::Comment(_)) {
//!             cx.remove();
//!         }
//!     }
//! }
//!
//! walk(&mut tree, &mut DropComments);
//! ```

use std::mem;

use smallvec::smallvec;

use crate::node::{Children, Node};

/// Callbacks driven by [`walk`].
pub trait Visitor {
    /// Called before the node's children are visited.
    fn enter(&mut self, _cx: &mut Visit<'_>) {}

    /// Called after the node's children are visited.
    fn leave(&mut self, _cx: &mut Visit<'_>) {}
}

/// Position of the node being visited, plus the mutation capabilities.
pub struct Visit<'a> {
    siblings: &'a mut Children,
    index: usize,
    depth: usize,
    has_parent: bool,
    skipped: bool,
    removed: bool,
}

impl<'a> Visit<'a> {
    fn new(siblings: &'a mut Children, index: usize, depth: usize, has_parent: bool) -> Self {
        Self {
            siblings,
            index,
            depth,
            has_parent,
            skipped: false,
            removed: false,
        }
    }

    /// The node being visited.
    #[inline]
    pub fn node(&self) -> &Node {
        &self.siblings[self.index]
    }

    /// Mutable access to the node being visited.
    #[inline]
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.siblings[self.index]
    }

    /// Whether the node has a parent (false only for the root).
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.has_parent
    }

    /// Index of the node among its parent's children.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.has_parent.then_some(self.index)
    }

    /// The parent's children, including the current node.
    #[inline]
    pub fn siblings(&self) -> Option<&[Node]> {
        self.has_parent.then_some(&self.siblings[..])
    }

    /// Depth of the node; the root is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Replace the current node.
    ///
    /// When called from `enter`, the walker descends into the replacement.
    pub fn replace(&mut self, node: Node) {
        self.siblings[self.index] = node;
    }

    /// Remove the current node once the callback returns.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    /// Do not descend into the current node. Only meaningful in `enter`.
    pub fn skip(&mut self) {
        self.skipped = true;
    }
}

/// Walk `root` depth-first, driving `visitor`.
///
/// The root is visited without a parent. If the visitor removes it, `root`
/// is left as an empty [`Root`](crate::node::Root).
pub fn walk<V: Visitor + ?Sized>(root: &mut Node, visitor: &mut V) {
    let mut slot: Children = smallvec![mem::replace(root, Node::Root(Box::default()))];
    visit_at(&mut slot, 0, 0, false, visitor);
    if let Some(node) = slot.pop() {
        *root = node;
    }
}

fn visit_children<V: Visitor + ?Sized>(children: &mut Children, depth: usize, visitor: &mut V) {
    let mut index = 0;
    while index < children.len() {
        if visit_at(children, index, depth, true, visitor) {
            index += 1;
        }
    }
}

/// Visit `children[index]` and its subtree. Returns false if the node was removed.
fn visit_at<V: Visitor + ?Sized>(
    children: &mut Children,
    index: usize,
    depth: usize,
    has_parent: bool,
    visitor: &mut V,
) -> bool {
    let mut cx = Visit::new(children, index, depth, has_parent);
    visitor.enter(&mut cx);
    let (skipped, removed) = (cx.skipped, cx.removed);

    if removed {
        children.remove(index);
        return false;
    }
    if skipped {
        return true;
    }

    if let Some(grandchildren) = children[index].children_mut() {
        visit_children(grandchildren, depth + 1, visitor);
    }

    let mut cx = Visit::new(children, index, depth, has_parent);
    visitor.leave(&mut cx);
    if cx.removed {
        children.remove(index);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, Expression};

    /// Records enter/leave events as `+kind@depth` / `-kind@depth`.
    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
    }

    impl Visitor for Trace {
        fn enter(&mut self, cx: &mut Visit<'_>) {
            self.events.push(format!("+{}@{}", label(cx.node()), cx.depth()));
        }

        fn leave(&mut self, cx: &mut Visit<'_>) {
            self.events.push(format!("-{}@{}", label(cx.node()), cx.depth()));
        }
    }

    fn label(node: &Node) -> String {
        match node {
            Node::Element(e) => e.tag.to_string(),
            Node::Text(t) => format!("'{}'", t.value),
            other => other.kind().to_string(),
        }
    }

    fn sample() -> Node {
        Node::root([
            Element::new("div").child(Element::new("p").text("a")).into(),
            Node::text("b"),
        ])
    }

    #[test]
    fn test_enter_leave_order() {
        let mut tree = sample();
        let mut trace = Trace::default();
        walk(&mut tree, &mut trace);
        assert_eq!(
            trace.events,
            vec![
                "+root@0", "+div@1", "+p@2", "+'a'@3", "-'a'@3", "-p@2", "-div@1",
                "+'b'@1", "-'b'@1", "-root@0",
            ]
        );
    }

    #[test]
    fn test_root_has_no_parent() {
        struct Check(Vec<(Option<usize>, bool)>);
        impl Visitor for Check {
            fn enter(&mut self, cx: &mut Visit<'_>) {
                self.0.push((cx.index(), cx.siblings().is_some()));
            }
        }

        let mut tree = sample();
        let mut check = Check(Vec::new());
        walk(&mut tree, &mut check);
        assert_eq!(check.0[0], (None, false));
        assert_eq!(check.0[1], (Some(0), true));
        assert_eq!(check.0.last(), Some(&(Some(1), true)));
    }

    #[test]
    fn test_remove_continues_with_next_sibling() {
        struct DropExpressions(Vec<String>);
        impl Visitor for DropExpressions {
            fn enter(&mut self, cx: &mut Visit<'_>) {
                if cx.node().is_expression() {
                    cx.remove();
                }
            }
            fn leave(&mut self, cx: &mut Visit<'_>) {
                self.0.push(label(cx.node()));
            }
        }

        let mut tree = Node::root([
            Expression::comment("x").into(),
            Expression::comment("y").into(),
            Node::text("kept"),
        ]);
        let mut visitor = DropExpressions(Vec::new());
        walk(&mut tree, &mut visitor);

        assert_eq!(tree.children().unwrap().len(), 1);
        assert_eq!(visitor.0, vec!["'kept'", "root"]);
    }

    #[test]
    fn test_skip_abandons_subtree_and_leave() {
        struct SkipDivs(Trace);
        impl Visitor for SkipDivs {
            fn enter(&mut self, cx: &mut Visit<'_>) {
                self.0.enter(cx);
                if cx.node().has_name("div") {
                    cx.skip();
                }
            }
            fn leave(&mut self, cx: &mut Visit<'_>) {
                self.0.leave(cx);
            }
        }

        let mut tree = sample();
        let mut visitor = SkipDivs(Trace::default());
        walk(&mut tree, &mut visitor);
        assert_eq!(visitor.0.events, vec!["+root@0", "+div@1", "+'b'@1", "-'b'@1", "-root@0"]);
    }

    #[test]
    fn test_replace_on_enter_descends_into_replacement() {
        struct Swap(Trace);
        impl Visitor for Swap {
            fn enter(&mut self, cx: &mut Visit<'_>) {
                if cx.node().has_name("div") {
                    cx.replace(Element::new("section").text("new").into());
                }
                self.0.enter(cx);
            }
        }

        let mut tree = sample();
        let mut visitor = Swap(Trace::default());
        walk(&mut tree, &mut visitor);
        assert!(visitor.0.events.contains(&"+section@1".to_string()));
        assert!(visitor.0.events.contains(&"+'new'@2".to_string()));
        assert!(tree.find(|n| n.has_name("div")).is_none());
    }

    #[test]
    fn test_replace_on_leave() {
        struct Upper;
        impl Visitor for Upper {
            fn leave(&mut self, cx: &mut Visit<'_>) {
                if let Some(t) = cx.node().as_text() {
                    let value = t.value.to_uppercase();
                    cx.replace(Node::text(value));
                }
            }
        }

        let mut tree = sample();
        walk(&mut tree, &mut Upper);
        let texts: Vec<_> = tree
            .descendants()
            .filter_map(Node::as_text)
            .map(|t| t.value.clone())
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_removing_root_leaves_empty_root() {
        struct RemoveRoot;
        impl Visitor for RemoveRoot {
            fn leave(&mut self, cx: &mut Visit<'_>) {
                if !cx.has_parent() {
                    cx.remove();
                }
            }
        }

        let mut tree = sample();
        walk(&mut tree, &mut RemoveRoot);
        assert_eq!(tree, Node::root([]));
    }
}
