//! Transform options.
//!
//! Options load from the same camelCase JSON object the markdown pipeline
//! passes to its plugins:
//!
//! ```json
//! {
//!   "splitComponent": "hr",
//!   "wrapperComponent": "Slide",
//!   "wrapperProps": { "className": "slide" },
//!   "importPath": "@deck/components"
//! }
//! ```

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::attr::{PropValue, Props, PropsExt};
use crate::error::{SplitWrapError, SplitWrapResult};
use crate::split::DEFAULT_SKIP_COMMENT;

/// Options for [`SplitWrap`](crate::transform::SplitWrap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitWrapOptions {
    /// Element tag or component name to split on
    pub split_component: String,

    /// Element tag or component name of the wrappers
    pub wrapper_component: String,

    /// Properties attached to every wrapper
    #[serde(default, with = "props_object", skip_serializing_if = "Vec::is_empty")]
    pub wrapper_props: Props,

    /// Prefix of skip control comments
    #[serde(default = "default_skip_comment")]
    pub skip_comment: String,

    /// Module to import the wrapper from. Without it no import is added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,

    /// Exported name of the wrapper, when it differs from `wrapper_component`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,

    /// Import the wrapper as the module's default export
    #[serde(default)]
    pub default_import: bool,
}

fn default_skip_comment() -> String {
    DEFAULT_SKIP_COMMENT.to_string()
}

impl SplitWrapOptions {
    /// Options splitting on `split_component` and wrapping in `wrapper_component`.
    pub fn new(split_component: impl Into<String>, wrapper_component: impl Into<String>) -> Self {
        Self {
            split_component: split_component.into(),
            wrapper_component: wrapper_component.into(),
            wrapper_props: Props::new(),
            skip_comment: default_skip_comment(),
            import_path: None,
            import_name: None,
            default_import: false,
        }
    }

    /// Parse and validate options from a JSON object.
    pub fn from_json(json: &str) -> SplitWrapResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Add one wrapper property.
    pub fn with_prop(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.wrapper_props.set_prop(name, value);
        self
    }

    /// Replace all wrapper properties.
    pub fn with_props(mut self, props: Props) -> Self {
        self.wrapper_props = props;
        self
    }

    pub fn with_skip_comment(mut self, prefix: impl Into<String>) -> Self {
        self.skip_comment = prefix.into();
        self
    }

    pub fn with_import(mut self, path: impl Into<String>) -> Self {
        self.import_path = Some(path.into());
        self
    }

    pub fn with_import_name(mut self, name: impl Into<String>) -> Self {
        self.import_name = Some(name.into());
        self
    }

    pub fn with_default_import(mut self, default_import: bool) -> Self {
        self.default_import = default_import;
        self
    }

    /// Check that the options describe a usable transform.
    pub fn validate(&self) -> SplitWrapResult<()> {
        if self.split_component.trim().is_empty() {
            return Err(SplitWrapError::invalid("splitComponent", "must not be empty"));
        }
        if self.wrapper_component.trim().is_empty() {
            return Err(SplitWrapError::invalid("wrapperComponent", "must not be empty"));
        }
        if self.skip_comment.trim().is_empty() {
            return Err(SplitWrapError::invalid("skipComment", "must not be blank"));
        }
        if self.import_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(SplitWrapError::invalid("importPath", "must not be empty when set"));
        }
        if self.import_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(SplitWrapError::invalid("importName", "must not be empty when set"));
        }
        Ok(())
    }
}

/// `wrapperProps` as a JSON object, kept in insertion order.
mod props_object {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::attr::{Props, props_from_map, props_to_map};

    pub fn serialize<S: Serializer>(props: &Props, serializer: S) -> Result<S::Ok, S::Error> {
        props_to_map(props).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Props, D::Error> {
        serde_json::Map::<String, serde_json::Value>::deserialize(deserializer).map(props_from_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_minimal() {
        let options =
            SplitWrapOptions::from_json(r#"{"splitComponent":"hr","wrapperComponent":"Wrapper"}"#).unwrap();
        assert_eq!(options, SplitWrapOptions::new("hr", "Wrapper"));
        assert_eq!(options.skip_comment, "splitwrap-skip");
        assert!(!options.default_import);
    }

    #[test]
    fn test_from_json_full() {
        let options = SplitWrapOptions::from_json(
            r#"{
                "splitComponent": "Custom",
                "wrapperComponent": "Wrapper",
                "wrapperProps": { "className": "wrapper-class", "style": { "backgroundColor": "red" } },
                "skipComment": "skip",
                "importPath": "@dummy/import",
                "importName": "OriginalWrapperName",
                "defaultImport": false
            }"#,
        )
        .unwrap();

        let expected = SplitWrapOptions::new("Custom", "Wrapper")
            .with_prop("className", "wrapper-class")
            .with_prop("style", json!({ "backgroundColor": "red" }))
            .with_skip_comment("skip")
            .with_import("@dummy/import")
            .with_import_name("OriginalWrapperName");
        assert_eq!(options, expected);
    }

    #[test]
    fn test_props_keep_insertion_order() {
        let options = SplitWrapOptions::from_json(
            r#"{"splitComponent":"hr","wrapperComponent":"W","wrapperProps":{"z":1,"a":2}}"#,
        )
        .unwrap();
        let keys: Vec<_> = options.wrapper_props.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_serialize_camel_case() {
        let options = SplitWrapOptions::new("hr", "Wrapper").with_prop("className", "x");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "splitComponent": "hr",
                "wrapperComponent": "Wrapper",
                "wrapperProps": { "className": "x" },
                "skipComment": "splitwrap-skip",
                "defaultImport": false
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let err = SplitWrapOptions::new("", "Wrapper").validate().unwrap_err();
        assert!(matches!(err, SplitWrapError::InvalidOption { field: "splitComponent", .. }));

        let err = SplitWrapOptions::new("hr", " ").validate().unwrap_err();
        assert!(matches!(err, SplitWrapError::InvalidOption { field: "wrapperComponent", .. }));

        let err = SplitWrapOptions::new("hr", "W").with_skip_comment("  ").validate().unwrap_err();
        assert!(matches!(err, SplitWrapError::InvalidOption { field: "skipComment", .. }));

        let err = SplitWrapOptions::new("hr", "W").with_import("").validate().unwrap_err();
        assert!(matches!(err, SplitWrapError::InvalidOption { field: "importPath", .. }));
    }

    #[test]
    fn test_from_json_errors() {
        let err = SplitWrapOptions::from_json(r#"{"splitComponent":"hr"}"#).unwrap_err();
        assert!(matches!(err, SplitWrapError::Json(_)));

        let err = SplitWrapOptions::from_json(r#"{"splitComponent":"","wrapperComponent":"W"}"#).unwrap_err();
        assert!(matches!(err, SplitWrapError::InvalidOption { .. }));
    }
}
