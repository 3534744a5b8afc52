//! The split-wrap plugin: options, import insertion and the split engine
//! bundled into one reusable transform.

use crate::error::SplitWrapResult;
use crate::import::add_import;
use crate::node::Node;
use crate::options::SplitWrapOptions;
use crate::split::{SplitStats, split_wrap};

use super::Transform;

/// Configured split-wrap transform.
///
/// Holds validated options only; every application builds its own engine
/// state, so one `SplitWrap` can be shared across documents and threads.
#[derive(Debug, Clone)]
pub struct SplitWrap {
    options: SplitWrapOptions,
}

impl SplitWrap {
    /// Validate `options` and build the transform.
    pub fn new(options: SplitWrapOptions) -> SplitWrapResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Build the transform from a JSON options object.
    pub fn from_json(json: &str) -> SplitWrapResult<Self> {
        SplitWrapOptions::from_json(json).map(|options| Self { options })
    }

    pub fn options(&self) -> &SplitWrapOptions {
        &self.options
    }

    /// Transform `tree` in place.
    ///
    /// With an import path configured, the wrapper import is added first and
    /// the wrappers use whatever name that import binds.
    pub fn apply(&self, tree: &mut Node) -> SplitStats {
        let options = &self.options;
        let wrapper = match options.import_path.as_deref() {
            Some(path) => {
                let item = options.import_name.as_deref().unwrap_or(&options.wrapper_component);
                add_import(
                    tree,
                    path,
                    item,
                    options.default_import,
                    Some(&options.wrapper_component),
                )
            }
            None => options.wrapper_component.clone(),
        };

        let stats = split_wrap(
            tree,
            &options.split_component,
            &wrapper,
            &options.wrapper_props,
            &options.skip_comment,
        );
        tracing::debug!(
            split = options.split_component.as_str(),
            wrapper = wrapper.as_str(),
            slides = stats.slides,
            fell_back = stats.fell_back,
            "split-wrap applied"
        );
        stats
    }
}

impl Transform for &SplitWrap {
    fn transform(self, mut tree: Node) -> Node {
        self.apply(&mut tree);
        tree
    }
}

impl Transform for SplitWrap {
    #[inline]
    fn transform(self, tree: Node) -> Node {
        (&self).transform(tree)
    }
}

/// Transform independent documents concurrently.
///
/// Returns the stats of each document, in input order.
#[cfg(feature = "parallel")]
pub fn split_wrap_all(trees: &mut [Node], plugin: &SplitWrap) -> Vec<SplitStats> {
    use rayon::prelude::*;

    trees.par_iter_mut().map(|tree| plugin.apply(tree)).collect()
}
