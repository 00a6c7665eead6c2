//! Search widget configuration.
//!
//! Locale entries are keyed by [`LocaleKey`]. The `root` key is the catch-all
//! entry: the theme's search widget only picks up translations registered
//! under `root`, even when a matching language key (e.g. `zh`) is present, so
//! `root` is kept as a distinct key and used as the fallback for every
//! language.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Search provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Built-in client-side index.
    Local,
    /// Hosted search service.
    External,
    /// Search disabled.
    #[default]
    None,
}

impl SearchProvider {
    /// Parse a provider tag.
    ///
    /// Returns `None` for tags outside the supported set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "local" => Some(Self::Local),
            "external" => Some(Self::External),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Provider tag as written in the config document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::External => "external",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a search locale entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocaleKey {
    /// The `root` fallback entry.
    Root,
    /// A language tag such as `zh` or `en-US`.
    Tag(String),
}

impl LocaleKey {
    /// Normalize a raw locale key.
    ///
    /// Trims whitespace and replaces `_` with `-`. `root` is matched
    /// case-insensitively.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("root") {
            Self::Root
        } else {
            Self::Tag(trimmed.replace('_', "-"))
        }
    }

    /// Key as written in normalized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LocaleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// UI strings for the search widget in one locale.
///
/// Every field is optional; unset strings keep the theme defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LocaleTranslations {
    /// Search button in the navigation bar.
    pub button: ButtonTranslations,
    /// Search modal.
    pub modal: ModalTranslations,
}

/// Search button strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_aria_label: Option<String>,
}

/// Search modal strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModalTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_details: Option<String>,
    /// Keyboard hints shown in the modal footer.
    pub footer: ModalFooterTranslations,
}

/// Search modal footer hints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModalFooterTranslations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_text: Option<String>,
}

/// Search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Search provider.
    pub provider: SearchProvider,
    /// Translations keyed by normalized locale key.
    pub locales: BTreeMap<LocaleKey, LocaleTranslations>,
}

impl SearchConfig {
    /// Translations for the `root` fallback entry.
    #[must_use]
    pub fn root(&self) -> Option<&LocaleTranslations> {
        self.locales.get(&LocaleKey::Root)
    }

    /// Translations to show for `lang`.
    ///
    /// Uses the entry registered under exactly `lang` when present, and the
    /// `root` entry otherwise.
    #[must_use]
    pub fn translations_for(&self, lang: &str) -> Option<&LocaleTranslations> {
        match LocaleKey::normalize(lang) {
            LocaleKey::Root => self.root(),
            key => self.locales.get(&key).or_else(|| self.root()),
        }
    }
}
