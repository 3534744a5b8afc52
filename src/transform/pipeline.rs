//! Document processing pipeline.

use crate::node::Node;

use super::{IdentityTransform, Transform};

/// Synchronous pipeline for document processing.
///
/// Wraps a tree and provides a fluent API for transformations and data
/// collection.
///
/// # Example
///
/// ```ignore
/// use slidewrap::transform::{Pipeline, SplitWrap};
///
/// let tree = Pipeline::new(tree)
///     .pipe(&split_wrap)
///     .inspect(|tree| tracing::debug!(nodes = tree.node_count()))
///     .into_inner();
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    tree: Node,
}

impl Pipeline {
    /// Create a new pipeline from a tree.
    #[inline]
    pub fn new(tree: Node) -> Self {
        Self { tree }
    }

    /// Apply a transform to the tree.
    #[inline]
    pub fn pipe<T: Transform>(self, transform: T) -> Self {
        Self {
            tree: transform.transform(self.tree),
        }
    }

    /// Conditionally apply a transform.
    ///
    /// Only applies the transform if `condition` is true.
    #[inline]
    pub fn pipe_if<T: Transform>(self, condition: bool, transform: T) -> Self {
        if condition {
            self.pipe(transform)
        } else {
            self.pipe(IdentityTransform)
        }
    }

    /// Inspect the tree without consuming the pipeline.
    ///
    /// Useful for logging, debugging, or snapshotting intermediate state.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&Node),
    {
        f(&self.tree);
        self
    }

    /// Tap into the pipeline to extract data while continuing the chain.
    #[inline]
    pub fn tap<F, R>(self, f: F) -> (Self, R)
    where
        F: FnOnce(&Node) -> R,
    {
        let result = f(&self.tree);
        (self, result)
    }

    /// Get a reference to the underlying tree.
    #[inline]
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Consume the pipeline and return the tree.
    #[inline]
    pub fn into_inner(self) -> Node {
        self.tree
    }
}

impl From<Node> for Pipeline {
    #[inline]
    fn from(tree: Node) -> Self {
        Self::new(tree)
    }
}

impl From<Pipeline> for Node {
    #[inline]
    fn from(pipeline: Pipeline) -> Self {
        pipeline.into_inner()
    }
}
