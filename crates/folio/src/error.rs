//! CLI error types.

use folio_config::LoadError;
use folio_site::WatchError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Watch(#[from] WatchError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
