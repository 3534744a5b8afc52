//! Partition/Wrap engine driving the walker.
//!
//! # State
//!
//! - A frame stack with one slot per open node. The slot holds the node's
//!   accumulation record once a split marker, a nested wrap or an outer
//!   exclusion has been seen among its children.
//! - The document-wide [`SkipMode`].
//! - The number of wrappers built, for the no-split fallback.
//!
//! # Enter
//!
//! 1. Under an outer/inner skip, abandon the subtree.
//! 2. A split marker (in normal mode) flushes the run before it as a slide
//!    and moves the parent's cursor past it. The marker itself is dropped.
//! 3. A skip comment moves the state machine and is removed from the tree.
//!
//! # Leave
//!
//! 1. A node with a record gets its trailing run flushed and is replaced by
//!    a copy holding the accumulated children. The replacement is then
//!    reported to the parent like a split event, so nesting is preserved.
//! 2. Inner/outer skips end at the node they were declared in. An outer skip
//!    also excludes that node from the parent's slides.

use std::mem;

use crate::attr::Props;
use crate::node::{Children, Element, Node};
use crate::walk::{Visit, Visitor};

use super::record::{Emit, Record};
use super::skip::{SkipComment, SkipMode};

pub(crate) struct Engine<'o> {
    split: &'o str,
    wrapper: &'o str,
    props: &'o Props,
    skip: SkipComment,
    mode: SkipMode,
    /// One slot per entered node that will receive a `leave`
    frames: Vec<Option<Record>>,
    slides: usize,
    root_excluded: bool,
}

impl<'o> Engine<'o> {
    pub fn new(split: &'o str, wrapper: &'o str, props: &'o Props, skip_comment: &str) -> Self {
        Self {
            split,
            wrapper,
            props,
            skip: SkipComment::new(skip_comment),
            mode: SkipMode::Stopped,
            frames: Vec::new(),
            slides: 0,
            root_excluded: false,
        }
    }

    pub fn slides(&self) -> usize {
        self.slides
    }

    pub fn mode(&self) -> SkipMode {
        self.mode
    }

    pub fn root_excluded(&self) -> bool {
        self.root_excluded
    }

    /// Whether the whole document should be wrapped once.
    pub fn needs_fallback(&self) -> bool {
        self.slides == 0 && self.mode == SkipMode::Stopped && !self.root_excluded
    }

    /// Build one wrapper around `children`.
    pub fn wrap(&self, children: Children) -> Node {
        Element::with_parts(self.wrapper, self.props.clone(), children).into()
    }

    /// Record of the parent of the node currently on top of the path.
    fn parent_record(&mut self) -> Option<&mut Record> {
        self.frames
            .last_mut()
            .map(|slot| slot.get_or_insert_with(Record::default))
    }

    fn is_split_marker(&self, node: &Node) -> bool {
        node.has_name(self.split)
    }

    /// Split marker at `index`: flush the run before it, skip past it.
    fn enter_split(&mut self, cx: &Visit<'_>) {
        let (Some(index), Some(siblings)) = (cx.index(), cx.siblings()) else {
            return;
        };
        let Some(record) = self.parent_record() else {
            return;
        };
        record.flush(siblings, index);
        record.cursor = index + 1;
    }

    /// Skip comment: apply the transition, consume the comment.
    ///
    /// Returns true if the comment was consumed.
    fn enter_comment(&mut self, cx: &mut Visit<'_>) -> bool {
        let Some(directive) = cx.node().as_expression().and_then(|e| self.skip.find(&e.comments)) else {
            return false;
        };
        let Some(next) = self.mode.transition(directive) else {
            tracing::debug!(mode = %self.mode, ?directive, "ignoring skip comment");
            return false;
        };

        tracing::debug!(from = %self.mode, to = %next, "skip mode");
        self.mode = next;
        if directive.discards_parent() {
            if let Some(slot) = self.frames.last_mut() {
                if slot.take().is_some() {
                    tracing::trace!("discarded partial wrapping of enclosing node");
                }
            }
        }
        cx.remove();
        true
    }

    /// Fold the record of the node being left into a replacement node.
    fn finalize(&mut self, record: Record, cx: &mut Visit<'_>) {
        let mut record = record;
        let children = match cx.node_mut().children_mut() {
            Some(children) => mem::take(children),
            None => return,
        };
        record.flush(&children, children.len());

        let (new_children, built) = record.materialize(children, |run| self.wrap(run));
        self.slides += built;
        tracing::trace!(kind = cx.node().kind(), wrappers = built, "finalized container");

        let mut replacement = cx.node().clone();
        if let Some(slot) = replacement.children_mut() {
            *slot = new_children;
        }
        cx.replace(replacement);

        self.report_nested(cx);
    }

    /// Report a replaced container to its parent's record.
    fn report_nested(&mut self, cx: &Visit<'_>) {
        let (Some(index), Some(siblings)) = (cx.index(), cx.siblings()) else {
            return;
        };
        let split = self.split;
        let Some(record) = self.parent_record() else {
            return;
        };

        record.flush(siblings, index);
        record.emits.push(Emit::Keep(index));

        // A split right after a nested wrap must not produce an empty slide.
        let next = (index + 1..siblings.len()).find(|&i| !siblings[i].is_whitespace());
        match next {
            Some(marker) if siblings[marker].has_name(split) => {
                record.emits.extend((index + 1..marker).map(Emit::Keep));
                record.cursor = marker + 1;
            }
            _ => record.cursor = index + 1,
        }
    }

    /// End of an inner/outer skip at the node it was declared in.
    fn leave_skip(&mut self, cx: &Visit<'_>) {
        match self.mode {
            SkipMode::Inner => {
                tracing::debug!(from = %self.mode, to = %SkipMode::Stopped, "skip mode");
                self.mode = SkipMode::Stopped;
            }
            SkipMode::Outer => {
                tracing::debug!(from = %self.mode, to = %SkipMode::Stopped, "skip mode");
                self.mode = SkipMode::Stopped;

                let Some(index) = cx.index() else {
                    self.root_excluded = true;
                    return;
                };
                let consumed_marker = self.is_split_marker(cx.node());
                let Some(record) = self.parent_record() else {
                    return;
                };
                record.excluded.insert(index);
                // A marker was already dropped when entered; keep it verbatim.
                if consumed_marker && index < record.cursor {
                    record.emits.push(Emit::Keep(index));
                }
            }
            SkipMode::Stopped | SkipMode::Start => {}
        }
    }
}

impl Visitor for Engine<'_> {
    fn enter(&mut self, cx: &mut Visit<'_>) {
        if self.mode.suppresses_descent() {
            cx.skip();
            return;
        }

        if self.mode.splits() && cx.has_parent() && self.is_split_marker(cx.node()) {
            self.enter_split(cx);
        } else if self.enter_comment(cx) {
            return;
        }

        self.frames.push(None);
    }

    fn leave(&mut self, cx: &mut Visit<'_>) {
        if let Some(record) = self.frames.pop().flatten() {
            self.finalize(record, cx);
        }
        self.leave_skip(cx);
    }
}
