//! Raw document to [`SiteConfig`] resolution.
//!
//! Validation is fail-fast and runs in a fixed order:
//!
//! 1. Top-level scalars (`lang` and `title` are required)
//! 2. `head` entries
//! 3. `themeConfig.nav` tree
//! 4. `themeConfig.search.options.locales`
//! 5. Cross-field checks between search provider and locales

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::head::parse_head_tag;
use crate::nav::{NavGroup, NavItem, NavLink};
use crate::search::{LocaleKey, LocaleTranslations, SearchConfig, SearchProvider};
use crate::site::{FooterInfo, SiteConfig, SocialLink, ThemeConfig};

/// Language tag: primary subtag of 2-3 letters, then `-`-separated subtags.
static LOCALE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());

type Object = Map<String, Value>;

/// Resolve a raw configuration document into a [`SiteConfig`].
///
/// The document is the parsed config file as an untyped value; see
/// [`load_document`](crate::load_document) for reading one from disk. Keys
/// follow the theme's camelCase convention (`themeConfig`, `activeMatch`, ...).
///
/// Returns the first error encountered; no partial configuration is ever
/// produced.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let config = folio_config::resolve(&json!({
///     "lang": "zh-CN",
///     "title": "T",
///     "description": "D",
/// }))
/// .unwrap();
///
/// assert_eq!(config.title, "T");
/// assert!(config.head.is_empty());
/// assert!(config.theme_config.nav.is_empty());
/// ```
pub fn resolve(raw: &Value) -> Result<SiteConfig, ConfigError> {
    let root = raw
        .as_object()
        .ok_or_else(|| ConfigError::invalid("<root>", "expected a mapping"))?;

    let lang = required_str(root, "lang", "lang")?;
    let title = required_str(root, "title", "title")?;
    if !LOCALE_TAG_RE.is_match(lang) {
        return Err(ConfigError::invalid(
            "lang",
            format!("`{lang}` is not a valid language tag"),
        ));
    }
    if title.trim().is_empty() {
        return Err(ConfigError::invalid("title", "cannot be empty"));
    }
    let description = optional_str(root, "description", "description")?;
    if description.is_some_and(|d| d.trim().is_empty()) {
        return Err(ConfigError::invalid("description", "cannot be empty"));
    }
    let base = optional_str(root, "base", "base")?.unwrap_or("/");
    if !base.starts_with('/') || !base.ends_with('/') {
        return Err(ConfigError::invalid("base", "must start and end with `/`"));
    }
    let logo = optional_str(root, "logo", "logo")?.map(str::to_owned);

    let head = match optional_array(root, "head", "head")? {
        Some(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_head_tag(i, entry))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let theme_config = match optional_object(root, "themeConfig", "themeConfig")? {
        Some(theme) => resolve_theme(theme)?,
        None => ThemeConfig::default(),
    };

    let config = SiteConfig {
        lang: lang.to_owned(),
        title: title.to_owned(),
        description: description.map(str::to_owned),
        base: base.to_owned(),
        logo,
        head,
        theme_config,
    };

    tracing::debug!(
        lang = %config.lang,
        head_tags = config.head.len(),
        nav_links = config.links().count(),
        search = %config.theme_config.search.provider,
        "Site configuration resolved"
    );

    Ok(config)
}

fn resolve_theme(theme: &Object) -> Result<ThemeConfig, ConfigError> {
    let logo = optional_str(theme, "logo", "themeConfig.logo")?.map(str::to_owned);

    let footer = optional_object(theme, "footer", "themeConfig.footer")?
        .map(resolve_footer)
        .transpose()?;

    let social_links = match optional_array(theme, "socialLinks", "themeConfig.socialLinks")? {
        Some(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| resolve_social_link(entry, &format!("themeConfig.socialLinks[{i}]")))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let nav = match optional_array(theme, "nav", "themeConfig.nav")? {
        Some(entries) => resolve_nav(entries, "themeConfig.nav")?,
        None => Vec::new(),
    };

    let search = match optional_object(theme, "search", "themeConfig.search")? {
        Some(search) => resolve_search(search)?,
        None => SearchConfig::default(),
    };

    Ok(ThemeConfig {
        logo,
        footer,
        search,
        nav,
        social_links,
    })
}

fn resolve_footer(footer: &Object) -> Result<FooterInfo, ConfigError> {
    let message = optional_str(footer, "message", "themeConfig.footer.message")?;
    let copyright = optional_str(footer, "copyright", "themeConfig.footer.copyright")?;
    if message.is_none() && copyright.is_none() {
        return Err(ConfigError::invalid(
            "themeConfig.footer",
            "expected `message` or `copyright`",
        ));
    }
    Ok(FooterInfo {
        message: message.map(str::to_owned),
        copyright: copyright.map(str::to_owned),
    })
}

fn resolve_social_link(raw: &Value, path: &str) -> Result<SocialLink, ConfigError> {
    let entry = raw
        .as_object()
        .ok_or_else(|| ConfigError::invalid(path, "expected a mapping"))?;
    Ok(SocialLink {
        icon: required_str(entry, "icon", &format!("{path}.icon"))?.to_owned(),
        link: required_str(entry, "link", &format!("{path}.link"))?.to_owned(),
        aria_label: optional_str(entry, "ariaLabel", &format!("{path}.ariaLabel"))?
            .map(str::to_owned),
    })
}

fn resolve_nav(entries: &[Value], path: &str) -> Result<Vec<NavItem>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| resolve_nav_item(entry, &format!("{path}[{i}]")))
        .collect()
}

/// Classify and resolve one navigation entry.
///
/// `link` wins over `items` when both are present.
fn resolve_nav_item(raw: &Value, path: &str) -> Result<NavItem, ConfigError> {
    let ambiguous = || ConfigError::AmbiguousNavItem {
        path: path.to_owned(),
    };
    let item = raw.as_object().ok_or_else(ambiguous)?;

    let href = optional_str(item, "link", &format!("{path}.link"))?;
    let children = match href {
        Some(_) => None,
        None => match optional_array(item, "items", &format!("{path}.items"))? {
            Some(children) if !children.is_empty() => Some(children),
            _ => return Err(ambiguous()),
        },
    };

    let text = required_str(item, "text", &format!("{path}.text"))?.to_owned();
    let active_match =
        optional_str(item, "activeMatch", &format!("{path}.activeMatch"))?.map(str::to_owned);

    match (href, children) {
        (Some(href), _) => Ok(NavItem::Link(NavLink {
            text,
            href: href.to_owned(),
            active_match,
            target: optional_str(item, "target", &format!("{path}.target"))?.map(str::to_owned),
            rel: optional_str(item, "rel", &format!("{path}.rel"))?.map(str::to_owned),
        })),
        (None, Some(children)) => Ok(NavItem::Group(NavGroup {
            text,
            active_match,
            items: resolve_nav(children, &format!("{path}.items"))?,
        })),
        (None, None) => Err(ambiguous()),
    }
}

fn resolve_search(search: &Object) -> Result<SearchConfig, ConfigError> {
    let provider = match optional_str(search, "provider", "themeConfig.search.provider")? {
        Some(tag) => SearchProvider::from_tag(tag).ok_or_else(|| {
            ConfigError::invalid(
                "themeConfig.search.provider",
                format!("unknown provider `{tag}` (expected local, external or none)"),
            )
        })?,
        None => SearchProvider::None,
    };

    let raw_locales = optional_object(search, "options", "themeConfig.search.options")?
        .map(|options| optional_object(options, "locales", "themeConfig.search.options.locales"))
        .transpose()?
        .flatten();

    let mut locales = BTreeMap::new();
    for (raw_key, entry) in raw_locales.into_iter().flatten() {
        let path = format!("themeConfig.search.options.locales.{raw_key}");
        let key = LocaleKey::normalize(raw_key);
        if key.as_str().is_empty() {
            return Err(ConfigError::invalid(path, "locale key cannot be empty"));
        }
        let translations = resolve_translations(entry, &path)?;
        if locales.insert(key.clone(), translations).is_some() {
            return Err(ConfigError::invalid(
                path,
                format!("duplicate locale key `{key}` after normalization"),
            ));
        }
    }

    if provider == SearchProvider::Local && !locales.contains_key(&LocaleKey::Root) {
        let declared: Vec<_> = locales.keys().map(LocaleKey::as_str).collect();
        return Err(ConfigError::IncompleteSearchConfig {
            reason: format!(
                "provider `local` requires a `root` entry in themeConfig.search.options.locales (found: [{}])",
                declared.join(", ")
            ),
        });
    }

    Ok(SearchConfig { provider, locales })
}

fn resolve_translations(entry: &Value, path: &str) -> Result<LocaleTranslations, ConfigError> {
    let entry = entry
        .as_object()
        .ok_or_else(|| ConfigError::invalid(path, "expected a mapping"))?;
    match entry.get("translations") {
        None | Some(Value::Null) => Ok(LocaleTranslations::default()),
        Some(raw) => serde_json::from_value(raw.clone())
            .map_err(|e| ConfigError::invalid(format!("{path}.translations"), e.to_string())),
    }
}

/// Look up a field, treating `null` as absent.
fn field<'a>(map: &'a Object, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn required_str<'a>(map: &'a Object, key: &str, path: &str) -> Result<&'a str, ConfigError> {
    optional_str(map, key, path)?.ok_or_else(|| ConfigError::missing(path))
}

fn optional_str<'a>(map: &'a Object, key: &str, path: &str) -> Result<Option<&'a str>, ConfigError> {
    match field(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ConfigError::invalid(path, "expected a string")),
    }
}

fn optional_array<'a>(
    map: &'a Object,
    key: &str,
    path: &str,
) -> Result<Option<&'a Vec<Value>>, ConfigError> {
    match field(map, key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(ConfigError::invalid(path, "expected a sequence")),
    }
}

fn optional_object<'a>(
    map: &'a Object,
    key: &str,
    path: &str,
) -> Result<Option<&'a Object>, ConfigError> {
    match field(map, key) {
        None => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(obj)),
        Some(_) => Err(ConfigError::invalid(path, "expected a mapping")),
    }
}
