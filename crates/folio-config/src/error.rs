//! Error types for configuration resolution and document loading.

use std::path::PathBuf;

/// Resolution error.
///
/// Every variant is fatal to the build: the resolver has no fallback values
/// for structural fields and never returns a partial site model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field path (e.g., "title", "themeConfig.nav[0].text").
        field: String,
    },
    /// A `head` entry does not have the `[tag, attrs]` or `[tag, attrs, content]` shape.
    #[error("Malformed head tag at head[{index}]: {reason}")]
    MalformedHeadTag {
        /// Position of the offending entry in `head`.
        index: usize,
        /// What is wrong with the entry.
        reason: String,
    },
    /// A navigation entry is neither a link nor a non-empty group.
    #[error("Ambiguous navigation item at {path}: expected `link` or non-empty `items`")]
    AmbiguousNavItem {
        /// Item path (e.g., "themeConfig.nav[1].items[0]").
        path: String,
    },
    /// The search provider needs locale entries that are not present.
    #[error("Incomplete search configuration: {reason}")]
    IncompleteSearchConfig {
        /// What is missing.
        reason: String,
    },
    /// A field is present but has the wrong type or an invalid value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        /// Field path.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn head(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeadTag {
            index,
            reason: reason.into(),
        }
    }
}

/// Error loading a configuration document from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Explicit config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No config file in the start directory or any parent.
    #[error("No configuration file found in {} or its parents", .0.display())]
    NotDiscovered(PathBuf),
    /// File extension is not one of the supported formats.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// The document parsed but did not resolve.
    #[error("{0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_field() {
        let err = ConfigError::missing("lang");
        assert_eq!(err.to_string(), "Missing required field: lang");
    }

    #[test]
    fn test_malformed_head_tag_carries_index() {
        let err = ConfigError::head(2, "expected 2 or 3 elements, got 1");
        assert!(matches!(err, ConfigError::MalformedHeadTag { index: 2, .. }));
        assert!(err.to_string().contains("head[2]"));
    }

    #[test]
    fn test_load_error_wraps_config_error() {
        let err: LoadError = ConfigError::missing("title").into();
        assert!(matches!(err, LoadError::Config(ConfigError::MissingField { .. })));
        assert_eq!(err.to_string(), "Missing required field: title");
    }
}
