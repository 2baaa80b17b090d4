//! Configuration system for skipprefs.
//!
//! This crate owns the category skip preferences and everything needed to
//! read and edit them. It includes:
//!
//! - Category, skip option and selection types
//! - The `Config` struct with YAML load/save
//! - Effective-option resolution across the global and channel scopes
//! - The selection editor and bar color editor
//! - A change-notifying store (`SyncedConfig`) behind the `ConfigStore` trait
//! - Configuration file watching

pub mod bar_colors;
pub mod config;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod resolve;
pub mod store;
mod types;
#[cfg(feature = "watcher")]
pub mod watcher;
pub mod wiki_links;

// Re-export main types for convenience
pub use config::{ChannelSettings, Config};
pub use error::ConfigError;

pub use types::{
    BarType, Category, CategoryCapabilities, CategorySelection, CategorySkipOption, LogLevel,
    Scope, SkipChoice, bar_type_key,
};

// Resolution and editing
pub use bar_colors::{BarColors, apply_bar_color, resolve_bar_colors};
pub use editor::{apply_selection, selectable_choices};
pub use resolve::{resolve_applied_option, resolve_effective_option};

// Store capability
pub use store::{ConfigChangeEvent, ConfigStore, FieldUpdate, SyncedConfig, TrackedField};

pub use wiki_links::wiki_link;

#[cfg(feature = "watcher")]
pub use watcher::{ConfigReloadEvent, ConfigWatcher};
