//! Event debouncing for config file watching.
//!
//! Editors typically emit several events per save (truncate, write, rename).
//! Events are coalesced per path and released once the path has been quiet
//! for the debounce duration.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::watch::ConfigEventKind;

/// A coalesced event ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DebouncedEvent {
    pub path: PathBuf,
    pub kind: ConfigEventKind,
}

struct PendingEvent {
    kind: ConfigEventKind,
    deadline: Instant,
}

/// Thread-safe event debouncer.
pub(crate) struct EventDebouncer {
    pending: Mutex<HashMap<PathBuf, PendingEvent>>,
    debounce_duration: Duration,
}

impl EventDebouncer {
    pub fn new(debounce_duration: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            debounce_duration,
        }
    }

    /// Record an event, restarting the quiet period for its path.
    ///
    /// Called from the notify callback thread.
    pub fn record(&self, path: PathBuf, kind: ConfigEventKind) {
        use std::collections::hash_map::Entry;

        let mut pending = self.pending.lock().unwrap();
        let deadline = Instant::now() + self.debounce_duration;

        match pending.entry(path) {
            Entry::Vacant(entry) => {
                entry.insert(PendingEvent { kind, deadline });
            }
            Entry::Occupied(mut entry) => {
                if let Some(kind) = Self::coalesce(entry.get().kind, kind) {
                    let pending = entry.get_mut();
                    pending.kind = kind;
                    pending.deadline = deadline;
                } else {
                    entry.remove();
                }
            }
        }
    }

    /// Coalesce two event kinds.
    ///
    /// Returns `None` if the file appeared and vanished within one window.
    #[allow(clippy::match_same_arms)]
    fn coalesce(existing: ConfigEventKind, new: ConfigEventKind) -> Option<ConfigEventKind> {
        use ConfigEventKind::{Created, Modified, Removed};

        match (existing, new) {
            (Created, Removed) => None,
            (Created, _) => Some(Created),
            (Modified, kind) => Some(kind),
            // Replaced by an atomic rename
            (Removed, Created) => Some(Modified),
            (Removed, _) => Some(Removed),
        }
    }

    /// Drain events whose quiet period has elapsed.
    pub fn drain_ready(&self) -> Vec<DebouncedEvent> {
        let mut pending = self.pending.lock().unwrap();
        let now = Instant::now();

        let ready: Vec<PathBuf> = pending
            .iter()
            .filter(|(_, event)| event.deadline <= now)
            .map(|(path, _)| path.clone())
            .collect();

        ready
            .into_iter()
            .filter_map(|path| {
                pending
                    .remove(&path)
                    .map(|event| DebouncedEvent { path, kind: event.kind })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("/site/folio.json")
    }

    fn settle(debouncer: &EventDebouncer) -> Vec<DebouncedEvent> {
        thread::sleep(Duration::from_millis(15));
        debouncer.drain_ready()
    }

    #[test]
    fn test_single_event_emitted_after_deadline() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Modified);

        assert!(debouncer.drain_ready().is_empty());
        let events = settle(&debouncer);
        assert_eq!(
            events,
            vec![DebouncedEvent {
                path: path(),
                kind: ConfigEventKind::Modified
            }]
        );
        assert!(debouncer.drain_ready().is_empty());
    }

    #[test]
    fn test_editor_save_burst_coalesces() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Modified);
        debouncer.record(path(), ConfigEventKind::Modified);
        debouncer.record(path(), ConfigEventKind::Modified);

        let events = settle(&debouncer);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ConfigEventKind::Modified);
    }

    #[test]
    fn test_removed_then_created_becomes_modified() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Removed);
        debouncer.record(path(), ConfigEventKind::Created);

        let events = settle(&debouncer);
        assert_eq!(events[0].kind, ConfigEventKind::Modified);
    }

    #[test]
    fn test_created_then_removed_discards_both() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Created);
        debouncer.record(path(), ConfigEventKind::Removed);

        assert!(settle(&debouncer).is_empty());
    }

    #[test]
    fn test_modified_then_removed_keeps_removed() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Modified);
        debouncer.record(path(), ConfigEventKind::Removed);

        assert_eq!(settle(&debouncer)[0].kind, ConfigEventKind::Removed);
    }

    #[test]
    fn test_created_then_modified_stays_created() {
        let debouncer = EventDebouncer::new(Duration::from_millis(10));

        debouncer.record(path(), ConfigEventKind::Created);
        debouncer.record(path(), ConfigEventKind::Modified);

        assert_eq!(settle(&debouncer)[0].kind, ConfigEventKind::Created);
    }

    #[test]
    fn test_new_event_extends_deadline() {
        let debouncer = EventDebouncer::new(Duration::from_millis(30));

        debouncer.record(path(), ConfigEventKind::Modified);
        thread::sleep(Duration::from_millis(20));
        debouncer.record(path(), ConfigEventKind::Modified);
        thread::sleep(Duration::from_millis(20));

        assert!(debouncer.drain_ready().is_empty());
        thread::sleep(Duration::from_millis(20));
        assert_eq!(debouncer.drain_ready().len(), 1);
    }
}
