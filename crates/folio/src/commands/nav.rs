//! `folio nav` command implementation.

use clap::Args;
use folio_config::{NavItem, flatten};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print only links, one per line, in display order.
    #[arg(long, conflicts_with = "json")]
    flat: bool,

    /// Print the resolved navigation tree as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or resolved.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (_, config) = folio_config::load(self.config.config.as_deref())?;
        let nav = &config.theme_config.nav;

        if self.json {
            output.data(&render_json(nav)?);
            return Ok(());
        }

        if nav.is_empty() {
            output.warning("No navigation configured");
            return Ok(());
        }

        if self.flat {
            for line in render_flat(nav) {
                output.data(&line);
            }
        } else {
            for line in render_tree(nav) {
                output.data(&line);
            }
        }

        Ok(())
    }
}

/// Navigation tree as pretty JSON (`[]` when empty).
fn render_json(nav: &[NavItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nav)
}

/// One `text<TAB>href` line per link.
fn render_flat(nav: &[NavItem]) -> Vec<String> {
    flatten(nav)
        .map(|link| format!("{}\t{}", link.text, link.href))
        .collect()
}

/// Indented outline of the navigation tree.
fn render_tree(nav: &[NavItem]) -> Vec<String> {
    fn walk(items: &[NavItem], depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for item in items {
            match item {
                NavItem::Link(link) => {
                    lines.push(format!("{indent}{} -> {}", link.text, link.href));
                }
                NavItem::Group(group) => {
                    lines.push(format!("{indent}{}/", group.text));
                    walk(&group.items, depth + 1, lines);
                }
            }
        }
    }

    let mut lines = Vec::new();
    walk(nav, 0, &mut lines);
    lines
}
