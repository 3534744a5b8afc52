//! Property bag for elements and wrappers
//!
//! - Ordered `Vec<(CompactString, PropValue)>` pairs, like HTML attributes
//! - Values are arbitrary JSON values (`className: "x"`, `style: {...}`)

use compact_str::CompactString;

/// Property value attached to an element or wrapper.
pub type PropValue = serde_json::Value;

/// Element properties as ordered key-value pairs
pub type Props = Vec<(CompactString, PropValue)>;

/// Extension trait for property operations on Props
pub trait PropsExt {
    /// Get a property value by name
    fn get_prop(&self, name: &str) -> Option<&PropValue>;

    /// Get a property as a string slice (only for string values)
    fn get_str(&self, name: &str) -> Option<&str>;

    /// Check if a property exists
    fn has_prop(&self, name: &str) -> bool;

    /// Set a property value (insert or update)
    fn set_prop(&mut self, name: impl Into<CompactString>, value: impl Into<PropValue>);

    /// Remove a property by name, returning the old value if present
    fn remove_prop(&mut self, name: &str) -> Option<PropValue>;
}

impl PropsExt for Props {
    fn get_prop(&self, name: &str) -> Option<&PropValue> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    fn get_str(&self, name: &str) -> Option<&str> {
        self.get_prop(name).and_then(PropValue::as_str)
    }

    fn has_prop(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_prop(&mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(prop) = self.iter_mut().find(|(k, _)| k == &name) {
            prop.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_prop(&mut self, name: &str) -> Option<PropValue> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

/// Collect a JSON object into ordered props.
pub fn props_from_map(map: serde_json::Map<String, PropValue>) -> Props {
    map.into_iter()
        .map(|(k, v)| (CompactString::from(k), v))
        .collect()
}

/// Convert props back into a JSON object.
pub fn props_to_map(props: &Props) -> serde_json::Map<String, PropValue> {
    props.iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_props_operations() {
        let mut props: Props = Vec::new();

        // Set
        props.set_prop("className", "wrapper-class");
        props.set_prop("style", json!({ "backgroundColor": "red" }));
        assert_eq!(props.len(), 2);

        // Get
        assert_eq!(props.get_str("className"), Some("wrapper-class"));
        assert_eq!(props.get_prop("style"), Some(&json!({ "backgroundColor": "red" })));
        assert_eq!(props.get_str("style"), None);
        assert_eq!(props.get_prop("id"), None);

        // Has
        assert!(props.has_prop("style"));
        assert!(!props.has_prop("id"));

        // Update existing
        props.set_prop("className", "other");
        assert_eq!(props.get_str("className"), Some("other"));
        assert_eq!(props.len(), 2);

        // Remove
        let removed = props.remove_prop("className");
        assert_eq!(removed, Some(json!("other")));
        assert!(!props.has_prop("className"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_props_map_conversion() {
        let map = match json!({ "a": 1, "b": true }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let props = props_from_map(map.clone());
        assert_eq!(props.get_prop("a"), Some(&json!(1)));
        assert_eq!(props.get_prop("b"), Some(&json!(true)));
        assert_eq!(props_to_map(&props), map);
    }
}
