//! Prelude module for common imports.
//!
//! ```ignore
//! use slidewrap::prelude::*;
//! ```

// Node types
pub use crate::node::{
    Children, Component, Doctype, Element, Esm, Expression, ImportDeclaration, ImportSpecifier,
    Node, Root, Text,
};

// Walker
pub use crate::walk::{Visit, Visitor, walk};

// Engine
pub use crate::split::{DEFAULT_SKIP_COMMENT, SkipComment, SkipDirective, SkipMode, SplitStats, split_wrap};

// Plugin
pub use crate::import::add_import;
pub use crate::options::SplitWrapOptions;
pub use crate::transform::{IdentityTransform, Pipeline, SplitWrap, Transform};

#[cfg(feature = "parallel")]
pub use crate::transform::split_wrap_all;

// Attributes
pub use crate::attr::{PropValue, Props, PropsExt};

// Render
pub use crate::render::{RenderConfig, outline, render};

// Error
pub use crate::error::{SplitWrapError, SplitWrapResult};
