//! Change-notifying configuration store.
//!
//! Editors never mutate a stored list in place and walk away: they build a new
//! value and hand it to [`ConfigStore::set`], which is the single trigger point
//! for persistence and change notification. A nested field (a channel's list)
//! is committed together with its parent map, so observers of either field see
//! the change.

use crate::config::{ChannelSettings, Config};
use crate::error::ConfigError;
use crate::types::{BarType, CategorySelection};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};

/// A configuration field whose assignment is observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackedField {
    /// `category_selections`
    CategorySelections,
    /// `channel_specific_settings[channel].category_selections`
    ChannelCategorySelections(String),
    /// `channel_specific_settings`
    ChannelSpecificSettings,
    /// `bar_types`
    BarTypes,
}

impl fmt::Display for TrackedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackedField::CategorySelections => f.write_str("category_selections"),
            TrackedField::ChannelCategorySelections(channel) => write!(
                f,
                "channel_specific_settings.{channel}.category_selections"
            ),
            TrackedField::ChannelSpecificSettings => f.write_str("channel_specific_settings"),
            TrackedField::BarTypes => f.write_str("bar_types"),
        }
    }
}

/// A new value for one tracked field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    CategorySelections(Vec<CategorySelection>),
    ChannelCategorySelections {
        channel: String,
        selections: Vec<CategorySelection>,
    },
    ChannelSpecificSettings(BTreeMap<String, ChannelSettings>),
    BarTypes(BTreeMap<String, BarType>),
}

impl FieldUpdate {
    /// The field this update assigns
    pub fn field(&self) -> TrackedField {
        match self {
            FieldUpdate::CategorySelections(_) => TrackedField::CategorySelections,
            FieldUpdate::ChannelCategorySelections { channel, .. } => {
                TrackedField::ChannelCategorySelections(channel.clone())
            }
            FieldUpdate::ChannelSpecificSettings(_) => TrackedField::ChannelSpecificSettings,
            FieldUpdate::BarTypes(_) => TrackedField::BarTypes,
        }
    }

    /// Assign the value onto `config`.
    ///
    /// A channel list can only be assigned to a channel that already exists.
    pub fn apply_to(self, config: &mut Config) -> Result<(), ConfigError> {
        match self {
            FieldUpdate::CategorySelections(selections) => {
                config.category_selections = selections;
            }
            FieldUpdate::ChannelCategorySelections {
                channel,
                selections,
            } => {
                let settings = config
                    .channel_specific_settings
                    .get_mut(&channel)
                    .ok_or(ConfigError::UnknownChannel(channel))?;
                settings.category_selections = selections;
            }
            FieldUpdate::ChannelSpecificSettings(settings) => {
                config.channel_specific_settings = settings;
            }
            FieldUpdate::BarTypes(bar_types) => {
                config.bar_types = bar_types;
            }
        }
        Ok(())
    }
}

/// Read access plus the tracked write used to commit edits.
pub trait ConfigStore {
    /// Current configuration
    fn config(&self) -> &Config;

    /// Assign a tracked field.
    ///
    /// Every call counts as a change, even when the new value equals the old
    /// one; callers rely on this to re-trigger observers of a parent field.
    fn set(&mut self, update: FieldUpdate) -> Result<(), ConfigError>;
}

/// A bare `Config` is a store with no observers.
impl ConfigStore for Config {
    fn config(&self) -> &Config {
        self
    }

    fn set(&mut self, update: FieldUpdate) -> Result<(), ConfigError> {
        update.apply_to(self)
    }
}

/// Notification sent to subscribers after a tracked field was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChangeEvent {
    pub field: TrackedField,
}

/// In-process store that persists each assignment and notifies subscribers.
pub struct SyncedConfig {
    config: Config,
    /// Backing file, if any
    path: Option<PathBuf>,
    /// Write the file after every `set`
    autosave: bool,
    subscribers: Vec<Sender<ConfigChangeEvent>>,
}

impl fmt::Debug for SyncedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncedConfig")
            .field("path", &self.path)
            .field("autosave", &self.autosave)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl SyncedConfig {
    /// Create an in-memory store (nothing is written to disk)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            path: None,
            autosave: false,
            subscribers: Vec::new(),
        }
    }

    /// Create a store backed by `path` with autosave enabled
    pub fn with_path(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: Some(path.into()),
            autosave: true,
            subscribers: Vec::new(),
        }
    }

    /// Load `path` (creating defaults when missing) and back the store with it
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = Config::load_from(&path)?;
        Ok(Self::with_path(config, path))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }

    /// Register a new observer of tracked-field assignments
    pub fn subscribe(&mut self) -> Receiver<ConfigChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Write the current configuration to the backing file, if any
    pub fn flush(&self) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }

    /// Replace the in-memory configuration with the backing file's contents.
    ///
    /// Used after the file was changed by another writer. Subscribers are not
    /// notified; nothing was assigned through this store.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            self.config = Config::load_from(path)?;
            log::info!("Reloaded config from {:?}", path);
        }
        Ok(())
    }

    pub fn into_inner(self) -> Config {
        self.config
    }

    fn notify(&mut self, field: TrackedField) {
        // Drop subscribers whose receiver has gone away
        self.subscribers.retain(|tx| {
            tx.send(ConfigChangeEvent {
                field: field.clone(),
            })
            .is_ok()
        });
    }
}

impl ConfigStore for SyncedConfig {
    fn config(&self) -> &Config {
        &self.config
    }

    fn set(&mut self, update: FieldUpdate) -> Result<(), ConfigError> {
        let field = update.field();
        update.apply_to(&mut self.config)?;
        log::debug!("Assigned {field}");

        let persisted = if self.autosave { self.flush() } else { Ok(()) };
        if let Err(e) = &persisted {
            log::error!("Failed to persist {field}: {e}");
        }

        self.notify(field);
        persisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, CategorySkipOption};
    use tempfile::TempDir;

    fn sponsor_auto() -> Vec<CategorySelection> {
        vec![CategorySelection::new(
            Category::Sponsor,
            CategorySkipOption::AutoSkip,
        )]
    }

    #[test]
    fn test_set_notifies_every_subscriber() {
        let mut store = SyncedConfig::new(Config::default());
        let rx1 = store.subscribe();
        let rx2 = store.subscribe();

        store
            .set(FieldUpdate::CategorySelections(sponsor_auto()))
            .expect("set");

        for rx in [&rx1, &rx2] {
            assert_eq!(
                rx.try_recv().expect("event"),
                ConfigChangeEvent {
                    field: TrackedField::CategorySelections
                }
            );
            assert!(rx.try_recv().is_err());
        }
        assert_eq!(store.config().category_selections, sponsor_auto());
    }

    #[test]
    fn test_reassigning_same_value_still_notifies() {
        let mut store = SyncedConfig::new(Config::default());
        let rx = store.subscribe();
        let same = store.config().channel_specific_settings.clone();

        store
            .set(FieldUpdate::ChannelSpecificSettings(same))
            .expect("set");
        assert_eq!(
            rx.try_recv().expect("event").field,
            TrackedField::ChannelSpecificSettings
        );
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut store = SyncedConfig::new(Config::default());
        drop(store.subscribe());
        let rx = store.subscribe();

        store
            .set(FieldUpdate::BarTypes(crate::defaults::bar_types()))
            .expect("set");
        assert_eq!(store.subscribers.len(), 1);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_channel_list_requires_existing_channel() {
        let mut store = SyncedConfig::new(Config::default());
        let rx = store.subscribe();

        let err = store
            .set(FieldUpdate::ChannelCategorySelections {
                channel: "missing".to_string(),
                selections: sponsor_auto(),
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownChannel(ref c) if c == "missing"));
        assert!(rx.try_recv().is_err(), "failed assignment must not notify");
    }

    #[test]
    fn test_autosave_writes_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        let mut store = SyncedConfig::with_path(Config::default(), &path);

        store
            .set(FieldUpdate::CategorySelections(sponsor_auto()))
            .expect("set");

        let on_disk = Config::load_from(&path).expect("load");
        assert_eq!(on_disk.category_selections, sponsor_auto());
    }

    #[test]
    fn test_autosave_disabled_leaves_file_untouched() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        let mut store = SyncedConfig::with_path(Config::default(), &path);
        store.set_autosave(false);

        store
            .set(FieldUpdate::CategorySelections(Vec::new()))
            .expect("set");
        assert!(!path.exists());

        store.flush().expect("flush");
        assert!(Config::load_from(&path).unwrap().category_selections.is_empty());
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.yaml");
        let mut store = SyncedConfig::open(&path).expect("open");

        let mut external = Config::default();
        external.category_selections.clear();
        external.save_to(&path).unwrap();

        store.reload().expect("reload");
        assert!(store.config().category_selections.is_empty());
    }
}
