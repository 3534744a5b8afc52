//! Core transform trait.

use crate::node::Node;

/// Transform a document tree.
pub trait Transform: Sized {
    /// Transform the tree.
    fn transform(self, tree: Node) -> Node;
}

// =============================================================================
// IdentityTransform
// =============================================================================

/// Identity transform that returns the tree unchanged.
///
/// Useful for conditional transforms where one branch doesn't need to modify
/// the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    #[inline]
    fn transform(self, tree: Node) -> Node {
        tree
    }
}
