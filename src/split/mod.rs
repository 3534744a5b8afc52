//! Split a document tree on a marker element and wrap each part.
//!
//! ```text
//! [A, <hr/>, B, C]  ──split_wrap("hr", "Wrapper")──▶  [<Wrapper>A</Wrapper>, <Wrapper>B C</Wrapper>]
//! ```
//!
//! Every container whose children include the split marker is rewritten the
//! same way, and nested rewrites stay nested: a container split below the
//! root shows up in its parent's output as one unwrapped node.
//!
//! When no wrapper is built anywhere, the root's content is wrapped once,
//! with doctype/ESM preamble nodes hoisted in front of the wrapper.
//!
//! See [`skip`] for the control comments that suspend or narrow splitting.

mod engine;
mod record;
pub mod skip;


pub use skip::{DEFAULT_SKIP_COMMENT, SkipComment, SkipDirective, SkipMode};

use std::mem;

use crate::attr::Props;
use crate::node::{Children, Node};
use crate::walk::walk;

use engine::Engine;

/// Outcome of one [`split_wrap`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitStats {
    /// Wrappers built, including the fallback wrapper
    pub slides: usize,
    /// Whether the whole document was wrapped once
    pub fell_back: bool,
    /// Skip mode at the end of the walk
    pub skip_mode: SkipMode,
    /// Whether an outer skip covered the root
    pub root_excluded: bool,
}

/// Split `tree` on `split` elements and wrap every run in a `wrapper` element.
///
/// - `split` is matched exactly against element tags and component names.
/// - `props` are attached to every wrapper.
/// - `skip_comment` is the control-comment prefix, matched case-insensitively.
///
/// The transform never fails; unexpected shapes are left untouched.
pub fn split_wrap(
    tree: &mut Node,
    split: &str,
    wrapper: &str,
    props: &Props,
    skip_comment: &str,
) -> SplitStats {
    let mut engine = Engine::new(split, wrapper, props, skip_comment);
    walk(tree, &mut engine);

    let mut stats = SplitStats {
        slides: engine.slides(),
        fell_back: false,
        skip_mode: engine.mode(),
        root_excluded: engine.root_excluded(),
    };

    if engine.needs_fallback() {
        if let Some(children) = tree.children_mut() {
            let (preamble, content): (Children, Children) =
                mem::take(children).into_iter().partition(Node::is_preamble);
            *children = preamble;
            children.push(engine.wrap(content));
            stats.slides += 1;
            stats.fell_back = true;
            tracing::debug!(wrapper, "no split found, wrapped whole document");
        }
    } else if stats.skip_mode != SkipMode::Stopped {
        tracing::debug!(mode = %stats.skip_mode, "skip region left open at end of document");
    }

    stats
}
