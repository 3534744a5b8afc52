//! slidewrap - Split markup/MDX document trees into wrapped slides
//!
//! ## Core Concepts
//!
//! **Split and wrap**: every container whose children include a split marker
//! (an `<hr/>`, or any named element/component) has its children regrouped
//! into wrapper elements, one per run between markers. The markers disappear.
//! Nested containers are rewritten in place, never flattened.
//!
//! **Fallback**: a document with no marker anywhere is wrapped once, with its
//! doctype/ESM preamble hoisted in front of the wrapper.
//!
//! **Skip comments**: `{/* splitwrap-skip start|stop|outer|inner */}`
//! expression comments suspend splitting or keep a node out of wrappers.
//!
//! ## Modules
//! - `node`: Node/Element/Component/Text/Expression/Esm types
//! - `walk`: Depth-first walker with enter/leave callbacks
//! - `split`: The split-wrap engine and skip-comment protocol
//! - `import`: Wrapper import insertion
//! - `transform`: `Transform` trait, `Pipeline`, the `SplitWrap` plugin
//! - `options`: Plugin options (serde, camelCase JSON)
//! - `render`: Markup and outline rendering
//!
//! ## Usage
//!
//! ```ignore
//! use slidewrap::prelude::*;
//!
//! let mut tree = Node::root([
//!     Element::new("h1").text("Intro").into(),
//!     Element::new("hr").into(),
//!     Element::new("p").text("Body").into(),
//! ]);
//!
//! let plugin = SplitWrap::new(SplitWrapOptions::new("hr", "Slide"))?;
//! let stats = plugin.apply(&mut tree);
//! assert_eq!(stats.slides, 2);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Node types: Root, Element, Component, Text, Expression, Doctype, Esm
pub mod node;

/// Property bag for elements and wrappers
pub mod attr;

/// Depth-first walker
pub mod walk;

/// Split-wrap engine and skip comments
pub mod split;

/// Import insertion
pub mod import;

/// Plugin options
pub mod options;

/// Transforms, pipeline and the split-wrap plugin
pub mod transform;

/// Markup rendering
pub mod render;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Component, Element, Node, Root, Text};

// Engine
pub use split::{SkipMode, SplitStats, split_wrap};

// Plugin
pub use import::add_import;
pub use options::SplitWrapOptions;
pub use transform::{Pipeline, SplitWrap, Transform};

#[cfg(feature = "parallel")]
pub use transform::split_wrap_all;

// Attribute types
pub use attr::{PropValue, Props, PropsExt};

// Error types
pub use error::{SplitWrapError, SplitWrapResult};
