//! Config file watcher.
//!
//! Other writers (a second CLI invocation, a hand edit) change `config.yaml`
//! behind the back of a running [`SyncedConfig`](crate::SyncedConfig). The
//! watcher reports those writes so the holder can `reload()`. Events are
//! debounced because editors and atomic saves produce bursts.

use anyhow::{Context, Result};
use notify::{Config as NotifyConfig, Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::time::{Duration, Instant};

/// The config file was written and should be reloaded.
#[derive(Debug, Clone)]
pub struct ConfigReloadEvent {
    /// Path to the config file that changed.
    pub path: PathBuf,
}

/// Decides which raw file-system events become reload events.
struct ReloadFilter {
    filename: OsString,
    path: PathBuf,
    debounce: Duration,
    last_sent: Mutex<Option<Instant>>,
}

impl ReloadFilter {
    fn matches(&self, event: &Event) -> bool {
        // Create covers atomic saves (temp file renamed over the config file)
        matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
            && event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(self.filename.as_os_str()))
    }

    fn debounced(&self, now: Instant) -> bool {
        let mut last = self.last_sent.lock();
        match *last {
            Some(prev) if now.duration_since(prev) < self.debounce => {
                log::trace!("Debouncing config reload event");
                true
            }
            _ => {
                *last = Some(now);
                false
            }
        }
    }

    fn handle(&self, result: notify::Result<Event>, tx: &Sender<ConfigReloadEvent>) {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Config watcher error: {}", e);
                return;
            }
        };
        if !self.matches(&event) || self.debounced(Instant::now()) {
            return;
        }
        log::info!("Config file changed: {}", self.path.display());
        if let Err(e) = tx.send(ConfigReloadEvent {
            path: self.path.clone(),
        }) {
            log::error!("Failed to send config reload event: {}", e);
        }
    }
}

/// Watches the config file and queues reload events.
pub struct ConfigWatcher {
    /// Kept alive to keep watching
    _watcher: Box<dyn Watcher + Send>,
    events: Receiver<ConfigReloadEvent>,
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").finish_non_exhaustive()
    }
}

impl ConfigWatcher {
    /// Start watching `config_path`.
    ///
    /// Uses the platform's native backend and falls back to polling every
    /// 500 ms when that is unavailable (containers, network filesystems).
    ///
    /// # Errors
    /// Returns an error if the file does not exist or neither backend can
    /// watch its directory.
    pub fn new(config_path: &Path, debounce_delay_ms: u64) -> Result<Self> {
        if !config_path.exists() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }

        let canonical = config_path
            .canonicalize()
            .unwrap_or_else(|_| config_path.to_path_buf());
        let filename = canonical
            .file_name()
            .context("Config path has no filename")?
            .to_os_string();
        let parent_dir = canonical
            .parent()
            .context("Config path has no parent directory")?
            .to_path_buf();

        let filter = Arc::new(ReloadFilter {
            filename,
            path: canonical.clone(),
            debounce: Duration::from_millis(debounce_delay_ms),
            last_sent: Mutex::new(None),
        });
        let (tx, rx) = channel();

        let mut watcher = Self::create_watcher(filter, tx)?;
        watcher
            .watch(&parent_dir, RecursiveMode::NonRecursive)
            .with_context(|| {
                format!("Failed to watch config directory: {}", parent_dir.display())
            })?;

        log::info!("Config hot reload: watching {}", canonical.display());

        Ok(Self {
            _watcher: watcher,
            events: rx,
        })
    }

    fn create_watcher(
        filter: Arc<ReloadFilter>,
        tx: Sender<ConfigReloadEvent>,
    ) -> Result<Box<dyn Watcher + Send>> {
        let handler = {
            let filter = Arc::clone(&filter);
            let tx = tx.clone();
            move |result: notify::Result<Event>| filter.handle(result, &tx)
        };

        match notify::recommended_watcher(handler) {
            Ok(w) => {
                log::debug!("Config watcher: using native backend");
                Ok(Box::new(w))
            }
            Err(e) => {
                log::warn!(
                    "Config watcher: native backend unavailable ({}); falling back to PollWatcher",
                    e
                );
                let poll_watcher = PollWatcher::new(
                    move |result: notify::Result<Event>| filter.handle(result, &tx),
                    NotifyConfig::default().with_poll_interval(Duration::from_millis(500)),
                )
                .context("Failed to create fallback PollWatcher")?;
                Ok(Box::new(poll_watcher))
            }
        }
    }

    /// Next pending reload event, without blocking.
    pub fn try_recv(&self) -> Option<ConfigReloadEvent> {
        self.events.try_recv().ok()
    }

    /// Wait up to `timeout` for the next reload event.
    ///
    /// Returns `Ok(None)` on timeout and an error once the watcher backend
    /// has shut down.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<ConfigReloadEvent>> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => anyhow::bail!("Config watcher stopped"),
        }
    }
}
