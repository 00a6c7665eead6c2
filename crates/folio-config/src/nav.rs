//! Navigation tree types and traversal.
//!
//! The resolved navigation is a forest of [`NavItem`]s. Renderers walk it
//! directly for menus, or use [`flatten`] to get the clickable leaves in
//! display order (sitemaps, prev/next links) and [`breadcrumb`] for trails.

use serde::Serialize;

/// Navigation node: a clickable link or a group of child nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Leaf entry with a target.
    Link(NavLink),
    /// Entry that expands into children.
    Group(NavGroup),
}

impl NavItem {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => &link.text,
            Self::Group(group) => &group.text,
        }
    }
}

/// Navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Link target (site path or absolute URL).
    #[serde(rename = "link")]
    pub href: String,
    /// Pattern the theme uses to mark the link active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Anchor `target` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Anchor `rel` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// Navigation group.
///
/// `items` is never empty after resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavGroup {
    /// Display text.
    pub text: String,
    /// Pattern the theme uses to mark the group active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
    /// Child items in display order.
    pub items: Vec<NavItem>,
}

/// Depth-first iterator over the links of a navigation tree.
///
/// Created by [`flatten`]. Groups are expanded in place and never yielded.
pub struct Links<'a> {
    stack: Vec<std::slice::Iter<'a, NavItem>>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a NavLink;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(NavItem::Link(link)) => return Some(link),
                Some(NavItem::Group(group)) => self.stack.push(group.items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterate over every link in `nav`, depth-first, left to right.
///
/// Lazy and restartable: call again for a fresh traversal.
///
/// # Example
///
/// ```
/// use folio_config::{NavGroup, NavItem, NavLink, flatten};
///
/// let link = |text: &str, href: &str| NavItem::Link(NavLink {
///     text: text.to_owned(),
///     href: href.to_owned(),
///     active_match: None,
///     target: None,
///     rel: None,
/// });
/// let nav = vec![
///     NavItem::Group(NavGroup {
///         text: "Guide".to_owned(),
///         active_match: None,
///         items: vec![link("Intro", "/intro"), link("Setup", "/setup")],
///     }),
///     link("Blog", "/blog"),
/// ];
///
/// let hrefs: Vec<_> = flatten(&nav).map(|l| l.href.as_str()).collect();
/// assert_eq!(hrefs, ["/intro", "/setup", "/blog"]);
/// ```
#[must_use]
pub fn flatten(nav: &[NavItem]) -> Links<'_> {
    Links {
        stack: vec![nav.iter()],
    }
}

/// Build the breadcrumb trail for the first link whose href equals `href`.
///
/// Returns the texts of every ancestor group followed by the link text, or
/// `None` if no link matches.
#[must_use]
pub fn breadcrumb<'a>(nav: &'a [NavItem], href: &str) -> Option<Vec<&'a str>> {
    fn walk<'a>(items: &'a [NavItem], href: &str, trail: &mut Vec<&'a str>) -> bool {
        for item in items {
            trail.push(item.text());
            let found = match item {
                NavItem::Link(link) => link.href == href,
                NavItem::Group(group) => walk(&group.items, href, trail),
            };
            if found {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    walk(nav, href, &mut trail).then_some(trail)
}
