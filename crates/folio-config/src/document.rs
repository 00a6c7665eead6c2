//! Config document loading and discovery.
//!
//! A config document can be written as JSON, YAML or TOML; all three parse
//! into the same untyped [`Value`] that [`resolve`] consumes.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;
use crate::resolve::resolve;
use crate::site::SiteConfig;

/// Config filenames searched for by [`discover_config`], in priority order.
pub const CONFIG_FILENAMES: [&str; 4] = ["folio.json", "folio.yaml", "folio.yml", "folio.toml"];

/// Serialization format of a config document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse document content.
    pub fn parse(self, content: &str) -> Result<Value, LoadError> {
        let value: Value = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        };
        Ok(value)
    }
}

/// Read and parse a config document without resolving it.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    format.parse(&content)
}

/// Search `start_dir` and its parents for a config file.
///
/// Within one directory, [`CONFIG_FILENAMES`] order decides which file wins.
#[must_use]
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        if let Some(found) = CONFIG_FILENAMES
            .iter()
            .map(|name| current.join(name))
            .find(|candidate| candidate.is_file())
        {
            return Some(found);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and resolve site configuration.
///
/// If `config_path` is provided, loads from that file. Otherwise, searches
/// the current directory and its parents (see [`discover_config`]).
///
/// Returns the path that was loaded together with the resolved config.
pub fn load(config_path: Option<&Path>) -> Result<(PathBuf, SiteConfig), LoadError> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd).ok_or(LoadError::NotDiscovered(cwd))?
        }
    };
    let config = load_file(&path)?;
    Ok((path, config))
}

/// Load and resolve site configuration from a specific file.
pub fn load_file(path: &Path) -> Result<SiteConfig, LoadError> {
    let document = load_document(path)?;
    let config = resolve(&document)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/folio.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("folio.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("folio.yaml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("folio.toml")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("config.js")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("folio")), None);
    }

    #[test]
    fn test_formats_parse_to_same_config() {
        let json = r#"{"lang": "en", "title": "Docs", "themeConfig": {"nav": [{"text": "Guide", "link": "/guide"}]}}"#;
        let yaml = "lang: en\ntitle: Docs\nthemeConfig:\n  nav:\n    - text: Guide\n      link: /guide\n";
        let toml = "lang = \"en\"\ntitle = \"Docs\"\n\n[[themeConfig.nav]]\ntext = \"Guide\"\nlink = \"/guide\"\n";

        let from_json = resolve(&DocumentFormat::Json.parse(json).unwrap()).unwrap();
        let from_yaml = resolve(&DocumentFormat::Yaml.parse(yaml).unwrap()).unwrap();
        let from_toml = resolve(&DocumentFormat::Toml.parse(toml).unwrap()).unwrap();

        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_yaml_head_tag_tuple() {
        let yaml = r"
lang: zh-CN
title: T
head:
  - - link
    - rel: icon
      href: /favicon32x32.ico
      type: image/x-icon
";
        let config = resolve(&DocumentFormat::Yaml.parse(yaml).unwrap()).unwrap();

        assert_eq!(config.head[0].name, "link");
        assert_eq!(config.head[0].attrs.len(), 3);
    }

    #[test]
    fn test_parse_error() {
        let err = DocumentFormat::Json.parse("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_load_document_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");

        let err = load_document(&path).unwrap_err();

        assert!(matches!(err, LoadError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_document_unsupported_format() {
        let err = load_document(Path::new("config.js")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_file_resolves() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.yaml");
        fs::write(&path, "lang: en\ntitle: Docs\n").unwrap();

        let config = load_file(&path).unwrap();

        assert_eq!(config.title, "Docs");
    }

    #[test]
    fn test_load_file_surfaces_resolve_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");
        fs::write(&path, r#"{"title": "Docs"}"#).unwrap();

        let err = load_file(&path).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Config(ConfigError::MissingField { field }) if field == "lang"
        ));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("site.toml");
        fs::write(&path, "lang = \"en\"\ntitle = \"Docs\"\n").unwrap();

        let (loaded, config) = load(Some(&path)).unwrap();

        assert_eq!(loaded, path);
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        let path = temp_dir.path().join("folio.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(discover_config(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("folio.toml"), "").unwrap();
        fs::write(temp_dir.path().join("folio.json"), "{}").unwrap();

        assert_eq!(
            discover_config(temp_dir.path()),
            Some(temp_dir.path().join("folio.json"))
        );
    }

    #[test]
    fn test_discover_config_nearest_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("docs");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("folio.json"), "{}").unwrap();
        fs::write(nested.join("folio.yml"), "").unwrap();

        assert_eq!(discover_config(&nested), Some(nested.join("folio.yml")));
    }
}
