//! Config file change notification.
//!
//! [`watch_file`] watches the directory containing the config file rather
//! than the file itself, so editors that save by writing a temporary file and
//! renaming it over the original keep being tracked.

use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use notify::{RecursiveMode, Watcher};

use crate::debouncer::EventDebouncer;

/// Quiet period before a burst of raw events is delivered as one.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Kind of config file change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigEventKind {
    Created,
    Modified,
    Removed,
}

/// A debounced config file change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigEvent {
    /// Path reported by the watcher.
    pub path: PathBuf,
    /// Kind of change.
    pub kind: ConfigEventKind,
}

/// Watcher setup error.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// Path has no file name component.
    #[error("Cannot watch {}: not a file path", .0.display())]
    InvalidPath(PathBuf),
    /// I/O error resolving the watched directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Underlying watcher error.
    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// Receiver for config change events.
pub struct ConfigEventReceiver {
    rx: mpsc::Receiver<ConfigEvent>,
}

impl ConfigEventReceiver {
    /// Wait for the next event (blocking).
    ///
    /// Returns `None` once the watcher has stopped.
    #[must_use]
    pub fn recv(&self) -> Option<ConfigEvent> {
        self.rx.recv().ok()
    }

    /// Wait for the next event for at most `timeout`.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ConfigEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Take an event if one is ready.
    #[must_use]
    pub fn try_recv(&self) -> Option<ConfigEvent> {
        self.rx.try_recv().ok()
    }

    /// Iterate over events until the watcher stops.
    pub fn iter(&self) -> impl Iterator<Item = ConfigEvent> + '_ {
        self.rx.iter()
    }
}

/// Handle that keeps the watcher alive.
///
/// Dropping the handle stops watching.
pub struct WatchHandle {
    shutdown: Option<mpsc::Sender<()>>,
}

impl WatchHandle {
    /// Stop watching immediately (consumes the handle).
    pub fn stop(mut self) {
        self.shutdown.take();
    }
}

fn event_kind(kind: notify::EventKind) -> Option<ConfigEventKind> {
    match kind {
        notify::EventKind::Create(_) => Some(ConfigEventKind::Created),
        notify::EventKind::Modify(_) => Some(ConfigEventKind::Modified),
        notify::EventKind::Remove(_) => Some(ConfigEventKind::Removed),
        _ => None,
    }
}

/// Watch a config file for changes.
///
/// Returns a receiver of debounced events and a handle that stops the
/// watcher when dropped.
pub fn watch_file(path: &Path) -> Result<(ConfigEventReceiver, WatchHandle), WatchError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| WatchError::InvalidPath(path.to_path_buf()))?
        .to_os_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.canonicalize()?,
        _ => std::env::current_dir()?,
    };

    let (event_tx, event_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let debouncer = Arc::new(EventDebouncer::new(DEBOUNCE));

    let watcher_debouncer = Arc::clone(&debouncer);
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Config watcher error");
                return;
            }
        };
        let Some(kind) = event_kind(event.kind) else {
            return;
        };
        for path in event.paths {
            if path.file_name() == Some(file_name.as_os_str()) {
                watcher_debouncer.record(path, kind);
            }
        }
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tracing::debug!(dir = %dir.display(), "Watching config directory");

    // Drain thread owns the watcher so it lives until shutdown.
    std::thread::spawn(move || {
        let _watcher = watcher;

        loop {
            match shutdown_rx.recv_timeout(Duration::from_millis(50)) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }

            for event in debouncer.drain_ready() {
                let event = ConfigEvent {
                    path: event.path,
                    kind: event.kind,
                };
                if event_tx.send(event).is_err() {
                    return;
                }
            }
        }
    });

    Ok((
        ConfigEventReceiver { rx: event_rx },
        WatchHandle {
            shutdown: Some(shutdown_tx),
        },
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_event_kind_mapping() {
        use notify::event::{CreateKind, ModifyKind, RemoveKind};

        assert_eq!(
            event_kind(notify::EventKind::Create(CreateKind::File)),
            Some(ConfigEventKind::Created)
        );
        assert_eq!(
            event_kind(notify::EventKind::Modify(ModifyKind::Any)),
            Some(ConfigEventKind::Modified)
        );
        assert_eq!(
            event_kind(notify::EventKind::Remove(RemoveKind::File)),
            Some(ConfigEventKind::Removed)
        );
        assert_eq!(event_kind(notify::EventKind::Any), None);
    }

    #[test]
    fn test_watch_file_rejects_path_without_file_name() {
        let result = watch_file(Path::new("/"));
        assert!(matches!(result, Err(WatchError::InvalidPath(_))));
    }

    #[test]
    fn test_watch_file_reports_modification() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");
        fs::write(&path, r#"{"lang": "en", "title": "A"}"#).unwrap();

        let (events, _handle) = watch_file(&path).unwrap();
        fs::write(&path, r#"{"lang": "en", "title": "B"}"#).unwrap();

        let event = events.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(event.path.file_name(), path.file_name());
    }

    #[test]
    fn test_watch_file_ignores_sibling_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");
        fs::write(&path, "{}").unwrap();

        let (events, _handle) = watch_file(&path).unwrap();
        fs::write(temp_dir.path().join("other.json"), "{}").unwrap();

        assert!(events.recv_timeout(Duration::from_millis(400)).is_none());
    }

    #[test]
    fn test_stop_ends_event_stream() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.json");
        fs::write(&path, "{}").unwrap();

        let (events, handle) = watch_file(&path).unwrap();
        handle.stop();

        assert!(events.recv_timeout(Duration::from_secs(2)).is_none());
    }
}
