//! Text node type
//!
//! Simple text content nodes in the tree.

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    /// Text content
    pub value: String,
}

impl Text {
    /// Create a new text node
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// Check if text is only whitespace (the `"\n"` between block nodes)
    pub fn is_whitespace(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let text = Text::new("  hello world  ");
        assert!(!text.is_whitespace());
        assert!(Text::default().is_whitespace());

        assert!(Text::new("\n").is_whitespace());
        assert!(Text::new(" \t\n ").is_whitespace());
    }
}
