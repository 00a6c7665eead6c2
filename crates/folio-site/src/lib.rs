//! Live site configuration state for Folio.
//!
//! This crate provides:
//! - [`ConfigStore`]: the current resolved [`SiteConfig`](folio_config::SiteConfig),
//!   replaced wholesale on reload
//! - [`watch_file`]: debounced change notification for a config file
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folio_site::{ConfigStore, watch_file};
//!
//! let store = ConfigStore::open("folio.json")?;
//! let (events, _handle) = watch_file(store.path())?;
//!
//! for _event in events.iter() {
//!     if let Err(e) = store.reload() {
//!         eprintln!("{e}");
//!     }
//!     let config = store.get();
//!     println!("{} links", config.links().count());
//! }
//! # Ok(())
//! # }
//! ```

mod debouncer;
mod store;
mod watch;

pub use store::ConfigStore;
pub use watch::{
    ConfigEvent, ConfigEventKind, ConfigEventReceiver, WatchError, WatchHandle, watch_file,
};
