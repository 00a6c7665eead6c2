//! HTML `<head>` tag descriptors.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Element emitted verbatim into the page `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    /// Tag name (e.g., "link", "meta", "script").
    pub name: String,
    /// Attributes by name.
    pub attrs: BTreeMap<String, String>,
    /// Inner content for tags like `script` or `style`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Whether this is a `<link>` whose `rel` includes `icon`.
    #[must_use]
    pub fn is_icon_link(&self) -> bool {
        self.name == "link"
            && self
                .attrs
                .get("rel")
                .is_some_and(|rel| rel.split_ascii_whitespace().any(|r| r == "icon"))
    }
}

/// Normalize one `head` entry.
///
/// Accepts `[tag, attrs]` and `[tag, attrs, content]`.
pub(crate) fn parse_head_tag(index: usize, raw: &Value) -> Result<HeadTag, ConfigError> {
    let Some(parts) = raw.as_array() else {
        return Err(ConfigError::head(index, "expected a [tag, attributes] array"));
    };
    if !(2..=3).contains(&parts.len()) {
        return Err(ConfigError::head(
            index,
            format!("expected 2 or 3 elements, got {}", parts.len()),
        ));
    }

    let name = match parts[0].as_str() {
        Some(name) if !name.trim().is_empty() => name.to_owned(),
        _ => return Err(ConfigError::head(index, "tag name must be a non-empty string")),
    };

    let Some(raw_attrs) = parts[1].as_object() else {
        return Err(ConfigError::head(index, "attributes must be a mapping"));
    };
    let attrs = raw_attrs
        .iter()
        .map(|(key, value)| {
            attr_value(value)
                .map(|v| (key.clone(), v))
                .ok_or_else(|| {
                    ConfigError::head(index, format!("attribute `{key}` must be a scalar"))
                })
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let content = match parts.get(2) {
        None => None,
        Some(Value::String(content)) => Some(content.clone()),
        Some(_) => return Err(ConfigError::head(index, "content must be a string")),
    };

    let tag = HeadTag {
        name,
        attrs,
        content,
    };
    if tag.is_icon_link() && !tag.attrs.contains_key("href") {
        return Err(ConfigError::head(index, "icon link requires `href`"));
    }
    Ok(tag)
}

fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
