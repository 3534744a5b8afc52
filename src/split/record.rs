//! Per-container accumulation records.
//!
//! A record collects what a container's new child list will be while the
//! container is open. Instead of moving nodes out of the live tree during the
//! walk, the record stores emit instructions against the container's child
//! indices; they are materialized once, when the container is left.

use std::ops::Range;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::node::{Children, Node};

/// One entry of a container's new child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Emit {
    /// Wrap the children in this index range
    Slide(Range<usize>),
    /// Pass the child at this index through unwrapped
    Keep(usize),
}

/// Accumulation record for one open container.
#[derive(Debug, Default)]
pub(crate) struct Record {
    /// Pending output, in document order
    pub emits: SmallVec<[Emit; 8]>,
    /// Start of the next ungrouped run
    pub cursor: usize,
    /// Children that must never be folded into a slide
    pub excluded: FxHashSet<usize>,
}

impl Record {
    /// Emit the run `[cursor, end)` of `siblings`.
    ///
    /// Preamble nodes are never wrapped: they cut the run into segments and
    /// are passed through in place between them.
    pub fn flush(&mut self, siblings: &[Node], end: usize) {
        let end = end.min(siblings.len());
        let mut start = self.cursor;
        while start < end {
            let stop = (start..end)
                .find(|&i| siblings[i].is_preamble())
                .unwrap_or(end);
            self.flush_segment(siblings, start, stop);
            if stop < end {
                self.emits.push(Emit::Keep(stop));
            }
            start = stop + 1;
        }
    }

    /// Emit one preamble-free segment.
    ///
    /// Boundary children (whitespace-only text and excluded indices) are
    /// peeled off both ends and passed through in place. A slide is emitted
    /// only if something remains in between.
    fn flush_segment(&mut self, siblings: &[Node], start: usize, stop: usize) {
        let (mut start, mut stop) = (start, stop);
        if start >= stop {
            return;
        }

        while start < stop && self.is_boundary(siblings, start) {
            self.emits.push(Emit::Keep(start));
            start += 1;
        }

        let mut after = SmallVec::<[usize; 4]>::new();
        while stop > start && self.is_boundary(siblings, stop - 1) {
            stop -= 1;
            after.push(stop);
        }

        if start < stop {
            tracing::trace!(start, stop, "slide");
            self.emits.push(Emit::Slide(start..stop));
        }
        self.emits.extend(after.into_iter().rev().map(Emit::Keep));
    }

    fn is_boundary(&self, siblings: &[Node], index: usize) -> bool {
        self.excluded.contains(&index) || siblings[index].is_whitespace()
    }

    /// Build the container's new children from its original ones.
    ///
    /// `wrap` turns one run into a wrapper node. Returns the new children and
    /// the number of wrappers built.
    pub fn materialize<F>(self, children: Children, mut wrap: F) -> (Children, usize)
    where
        F: FnMut(Children) -> Node,
    {
        let mut slots: Vec<Option<Node>> = children.into_iter().map(Some).collect();
        let mut output = Children::with_capacity(self.emits.len());
        let mut wrappers = 0;

        for emit in self.emits {
            match emit {
                Emit::Slide(range) => {
                    let end = range.end.min(slots.len());
                    let start = range.start.min(end);
                    let run: Children = slots[start..end].iter_mut().filter_map(Option::take).collect();
                    output.push(wrap(run));
                    wrappers += 1;
                }
                Emit::Keep(index) => {
                    if let Some(node) = slots.get_mut(index).and_then(Option::take) {
                        output.push(node);
                    }
                }
            }
        }

        (output, wrappers)
    }
}
