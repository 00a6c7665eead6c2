//! Site configuration resolution for Folio.
//!
//! Turns the loosely-structured config document of a documentation site
//! into a validated, immutable [`SiteConfig`]:
//!
//! - [`resolve`]: raw document → [`SiteConfig`], failing fast with a [`ConfigError`]
//! - [`flatten`]: depth-first iterator over the links of a navigation tree
//! - [`load`] / [`load_file`]: read a JSON, YAML or TOML document from disk and resolve it
//!
//! ## Config Document
//!
//! ```yaml
//! lang: zh-CN
//! title: My Docs
//! description: Project documentation
//! head:
//!   - [link, { rel: icon, href: /favicon.ico }]
//! themeConfig:
//!   footer:
//!     message: Released under the MIT License.
//!   search:
//!     provider: local
//!     options:
//!       locales:
//!         root:
//!           translations:
//!             button: { buttonText: Search }
//!   nav:
//!     - text: Guide
//!       items:
//!         - { text: Getting Started, link: /guide/ }
//! ```
//!
//! ## Search Locales
//!
//! Search translations registered under `root` apply to every language that
//! has no entry of its own. The theme's search widget ignores language keys
//! such as `zh` and only reads `root`, so a `local` provider requires a
//! `root` entry.

mod document;
mod error;
mod head;
mod nav;
mod resolve;
mod search;
mod site;

pub use document::{
    CONFIG_FILENAMES, DocumentFormat, discover_config, load, load_document, load_file,
};
pub use error::{ConfigError, LoadError};
pub use head::HeadTag;
pub use nav::{Links, NavGroup, NavItem, NavLink, breadcrumb, flatten};
pub use resolve::resolve;
pub use search::{
    ButtonTranslations, LocaleKey, LocaleTranslations, ModalFooterTranslations,
    ModalTranslations, SearchConfig, SearchProvider,
};
pub use site::{FooterInfo, SiteConfig, SocialLink, ThemeConfig};
