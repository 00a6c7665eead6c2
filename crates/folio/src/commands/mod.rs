//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;
pub(crate) mod watch;

use std::path::PathBuf;

use clap::Args;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;
pub(crate) use watch::WatchArgs;

/// Config file selection shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover folio.{json,yaml,yml,toml}).
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,
}
