//! Tree transforms and the split-wrap plugin.
//!
//! # Module Structure
//!
//! - `Transform` - Core trait: owned tree in, owned tree out
//! - `Pipeline` - Fluent chaining of transforms
//! - `SplitWrap` - The configured split-wrap plugin
//!
//! With `parallel` feature:
//! - `split_wrap_all` - Transform independent documents on the rayon pool
//!
//! # Example
//!
//! ```ignore
//! use slidewrap::options::SplitWrapOptions;
//! use slidewrap::transform::{Pipeline, SplitWrap};
//!
//! let plugin = SplitWrap::new(SplitWrapOptions::new("hr", "Slide"))?;
//! let tree = Pipeline::new(tree).pipe(&plugin).into_inner();
//! ```

mod core;
mod pipeline;
mod split_wrap;

pub use self::core::{IdentityTransform, Transform};
pub use pipeline::Pipeline;
pub use split_wrap::SplitWrap;

#[cfg(feature = "parallel")]
pub use split_wrap::split_wrap_all;
