//! Skip-comment protocol and skip-mode state machine.
//!
//! Control comments attached to expression nodes alter splitting mid-walk:
//!
//! ```text
//! {/* splitwrap-skip start */}   suspend splitting until `stop`
//! {/* splitwrap-skip stop */}    resume splitting
//! {/* splitwrap-skip outer */}   keep the enclosing node out of every wrapper
//! {/* splitwrap-skip inner */}   wrap the enclosing node, but do not split inside it
//! ```
//!
//! Only the transitions in [`SkipMode::transition`] fire; any other
//! combination leaves the comment in place and changes nothing.

use std::fmt;
use std::str::FromStr;

/// Default skip-comment prefix.
pub const DEFAULT_SKIP_COMMENT: &str = "splitwrap-skip";

/// Document-wide skip state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipMode {
    /// Normal splitting
    #[default]
    Stopped,
    /// Explicit region opened by a `start` comment
    Start,
    /// Enclosing node is excluded from wrapping
    Outer,
    /// Enclosing node is wrapped but not split
    Inner,
}

/// Directive carried by a skip comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirective {
    Start,
    Stop,
    Outer,
    Inner,
}

impl SkipMode {
    /// Next mode for `directive`, or `None` when the transition is not allowed.
    pub fn transition(self, directive: SkipDirective) -> Option<SkipMode> {
        match (self, directive) {
            (SkipMode::Stopped, SkipDirective::Start) => Some(SkipMode::Start),
            (SkipMode::Start, SkipDirective::Stop) => Some(SkipMode::Stopped),
            (SkipMode::Stopped, SkipDirective::Outer) => Some(SkipMode::Outer),
            (SkipMode::Stopped, SkipDirective::Inner) => Some(SkipMode::Inner),
            _ => None,
        }
    }

    /// Outer and inner skips abandon descent into every node they cover.
    #[inline]
    pub fn suppresses_descent(self) -> bool {
        matches!(self, SkipMode::Outer | SkipMode::Inner)
    }

    /// Split markers are only honored in normal mode.
    #[inline]
    pub fn splits(self) -> bool {
        self == SkipMode::Stopped
    }
}

impl fmt::Display for SkipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipMode::Stopped => "stopped",
            SkipMode::Start => "start",
            SkipMode::Outer => "outer",
            SkipMode::Inner => "inner",
        })
    }
}

impl SkipDirective {
    /// Whether the directive abandons the enclosing node's partial wrapping.
    #[inline]
    pub fn discards_parent(self) -> bool {
        matches!(self, SkipDirective::Outer | SkipDirective::Inner)
    }
}

impl FromStr for SkipDirective {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(SkipDirective::Start),
            "stop" => Ok(SkipDirective::Stop),
            "outer" => Ok(SkipDirective::Outer),
            "inner" => Ok(SkipDirective::Inner),
            _ => Err(()),
        }
    }
}

/// Matcher for skip comments with a configured prefix.
#[derive(Debug, Clone)]
pub struct SkipComment {
    /// Lowercased, trimmed prefix
    prefix: String,
}

impl SkipComment {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim().to_lowercase(),
        }
    }

    /// Parse one comment text.
    ///
    /// The trimmed, lowercased text must start with the prefix, followed by
    /// whitespace and exactly one directive word.
    pub fn parse(&self, comment: &str) -> Option<SkipDirective> {
        let text = comment.trim().to_lowercase();
        let rest = text.strip_prefix(self.prefix.as_str())?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        rest.trim().parse().ok()
    }

    /// First directive among a node's attached comments.
    pub fn find<S: AsRef<str>>(&self, comments: &[S]) -> Option<SkipDirective> {
        comments.iter().find_map(|c| self.parse(c.as_ref()))
    }
}

impl Default for SkipComment {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_COMMENT)
    }
}
