//! `folio watch` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{LoadError, discover_config};
use folio_site::{ConfigEventKind, ConfigStore, watch_file};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// The initial load must succeed. Later reload failures are reported and
    /// the previous configuration stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial load fails or the watcher cannot start.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let path = self.resolve_path()?;
        let store = ConfigStore::open(&path)?;
        let (events, _handle) = watch_file(store.path())?;

        let config = store.get();
        output.highlight(&config.title);
        output.info(&format!("Watching {}", path.display()));
        output.muted("Press Ctrl+C to stop");

        for event in events.iter() {
            tracing::debug!(path = %event.path.display(), kind = ?event.kind, "Config change detected");
            if event.kind == ConfigEventKind::Removed {
                output.warning(&format!("{} was removed", path.display()));
                continue;
            }
            match store.reload() {
                Ok(config) => output.success(&format!(
                    "Reloaded {} ({} links)",
                    config.title,
                    config.links().count()
                )),
                Err(e) => {
                    output.error(&format!("Reload failed: {e}"));
                    output.muted("Keeping previous configuration");
                }
            }
        }

        Ok(())
    }

    fn resolve_path(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.config.config {
            return Ok(path.clone());
        }
        let cwd = std::env::current_dir().map_err(LoadError::from)?;
        discover_config(&cwd).ok_or_else(|| LoadError::NotDiscovered(cwd).into())
    }
}
