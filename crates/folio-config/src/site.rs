//! Resolved site model.

use serde::Serialize;

use crate::head::HeadTag;
use crate::nav::{Links, NavItem, flatten};
use crate::search::SearchConfig;

/// Fully resolved site configuration.
///
/// Built once by [`resolve`](crate::resolve) and never mutated afterwards.
/// A changed config document produces a new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site language tag (e.g., "zh-CN").
    pub lang: String,
    /// Site title.
    pub title: String,
    /// Site description, never blank when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Base URL path the site is served under.
    pub base: String,
    /// Site logo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Extra `<head>` elements in document order.
    pub head: Vec<HeadTag>,
    /// Theme configuration.
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Links of the top navigation in display order.
    #[must_use]
    pub fn links(&self) -> Links<'_> {
        flatten(&self.theme_config.nav)
    }
}

/// Theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Logo shown in the navigation bar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Page footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterInfo>,
    /// Search widget.
    pub search: SearchConfig,
    /// Top navigation in display order.
    pub nav: Vec<NavItem>,
    /// Social icons in the navigation bar.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

/// Page footer text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Social icon link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Icon name (e.g., "github").
    pub icon: String,
    /// Link target.
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}
