//! Process-wide site configuration slot.
//!
//! # Thread Safety
//!
//! `ConfigStore` is designed for concurrent access:
//! - `get()` returns `Arc<SiteConfig>` with minimal locking (just Arc clone)
//! - `reload()` serializes re-resolution and replaces the snapshot in one write
//!
//! Readers holding an older `Arc` keep a complete, consistent config; they
//! never observe a partially updated one.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use folio_config::{LoadError, SiteConfig, load_file};

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Holds the current resolved configuration for a config file.
pub struct ConfigStore {
    path: PathBuf,
    /// Mutex for serializing reload operations.
    reload_lock: Mutex<()>,
    /// Current config snapshot (atomically swappable).
    current: RwLock<Arc<SiteConfig>>,
    /// Number of successful reloads since open.
    generation: AtomicU64,
}

impl ConfigStore {
    /// Load and resolve `path`.
    ///
    /// Unlike [`reload`](Self::reload), failure here is fatal: there is no
    /// previous config to fall back to.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let config = load_file(&path)?;
        Ok(Self::with_config(path, config))
    }

    /// Create a store around an already resolved config.
    #[must_use]
    pub fn with_config(path: impl Into<PathBuf>, config: SiteConfig) -> Self {
        Self {
            path: path.into(),
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(config)),
            generation: AtomicU64::new(0),
        }
    }

    /// Get the current config snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Re-resolve the config file and swap in the result.
    ///
    /// On error the current snapshot is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload(&self) -> Result<Arc<SiteConfig>, LoadError> {
        let _guard = self.reload_lock.lock().unwrap();
        let start = Instant::now();

        let config = match load_file(&self.path) {
            Ok(config) => Arc::new(config),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Configuration reload failed, keeping previous configuration"
                );
                return Err(e);
            }
        };

        *self.current.write().unwrap() = Arc::clone(&config);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        tracing::info!(
            path = %self.path.display(),
            generation,
            nav_links = config.links().count(),
            elapsed_ms = elapsed_ms(start),
            "Configuration reloaded"
        );

        Ok(config)
    }

    /// Number of successful reloads since the store was opened.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Config file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::ConfigStore: Send, Sync);

    use std::fs;
    use std::thread;

    use folio_config::ConfigError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, title: &str) -> PathBuf {
        let path = dir.join("folio.json");
        fs::write(
            &path,
            format!(
                r#"{{"lang": "en", "title": "{title}", "themeConfig": {{"nav": [{{"text": "Home", "link": "/"}}]}}}}"#
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_open_loads_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "First");

        let store = ConfigStore::open(&path).unwrap();

        assert_eq!(store.get().title, "First");
        assert_eq!(store.generation(), 0);
        assert_eq!(store.path(), path);
    }

    #[test]
    fn test_open_fails_on_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");
        fs::write(&path, r#"{"lang": "en"}"#).unwrap();

        let result = ConfigStore::open(&path);

        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_reload_swaps_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "First");
        let store = ConfigStore::open(&path).unwrap();
        let before = store.get();

        write_config(temp_dir.path(), "Second");
        let reloaded = store.reload().unwrap();

        assert_eq!(reloaded.title, "Second");
        assert_eq!(store.get().title, "Second");
        assert_eq!(store.generation(), 1);
        // Earlier snapshot is unaffected
        assert_eq!(before.title, "First");
    }

    #[test]
    fn test_reload_failure_keeps_previous() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "First");
        let store = ConfigStore::open(&path).unwrap();

        fs::write(&path, r#"{"lang": "en", "title": "T", "themeConfig": {"nav": [{"text": "X"}]}}"#)
            .unwrap();
        let err = store.reload().unwrap_err();

        assert!(matches!(
            err,
            LoadError::Config(ConfigError::AmbiguousNavItem { .. })
        ));
        assert_eq!(store.get().title, "First");
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_reload_after_file_removed_keeps_previous() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "First");
        let store = ConfigStore::open(&path).unwrap();

        fs::remove_file(&path).unwrap();

        assert!(matches!(store.reload(), Err(LoadError::NotFound(_))));
        assert_eq!(store.get().title, "First");
    }

    #[test]
    fn test_concurrent_readers_see_complete_configs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "First");
        let store = Arc::new(ConfigStore::open(&path).unwrap());

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let config = store.get();
                        assert!(config.title == "First" || config.title == "Second");
                        assert_eq!(config.links().count(), 1);
                    }
                })
            })
            .collect();

        write_config(temp_dir.path(), "Second");
        store.reload().unwrap();

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(store.get().title, "Second");
    }
}
