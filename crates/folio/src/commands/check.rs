//! `folio check` command implementation.

use clap::Args;
use folio_config::{LocaleKey, SiteConfig};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or resolved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (path, config) = folio_config::load(self.config.config.as_deref())?;

        output.highlight(&config.title);
        output.info(&format!("Config: {}", path.display()));
        for line in summary(&config) {
            output.info(&line);
        }
        output.success("Configuration is valid");

        Ok(())
    }
}

/// Human-readable summary lines for a resolved config.
fn summary(config: &SiteConfig) -> Vec<String> {
    let theme = &config.theme_config;
    let search = &theme.search;

    let mut lines = vec![
        format!("Language: {}", config.lang),
        format!("Base: {}", config.base),
        format!("Head tags: {}", config.head.len()),
        format!(
            "Navigation: {} top-level items, {} links",
            theme.nav.len(),
            config.links().count()
        ),
    ];

    let locales: Vec<_> = search.locales.keys().map(LocaleKey::as_str).collect();
    if locales.is_empty() {
        lines.push(format!("Search: {}", search.provider));
    } else {
        lines.push(format!(
            "Search: {} (locales: {})",
            search.provider,
            locales.join(", ")
        ));
    }

    if let Some(footer) = &theme.footer {
        let text = [footer.message.as_deref(), footer.copyright.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("Footer: {text}"));
    }

    lines
}
