//! Shared integration test helpers for skipprefs.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{RecordingStore, config_file_in_tmp_dir, run_cli};
//! ```
//!
//! The `#![allow(dead_code)]` below suppresses warnings when only a subset of
//! helpers is used per test file.

#![allow(dead_code)]

use clap::Parser;
use skipprefs::cli::{Cli, run};
use skipprefs::config::{
    Category, CategorySelection, CategorySkipOption, Config, ConfigError, ConfigStore,
    FieldUpdate, TrackedField,
};
use std::path::PathBuf;
use tempfile::TempDir;

/// `ConfigStore` that applies every update and remembers which fields were
/// assigned, in order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub config: Config,
    pub assigned: Vec<TrackedField>,
}

impl RecordingStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            assigned: Vec::new(),
        }
    }
}

impl ConfigStore for RecordingStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn set(&mut self, update: FieldUpdate) -> Result<(), ConfigError> {
        self.assigned.push(update.field());
        update.apply_to(&mut self.config)
    }
}

/// A config with one channel (`chanA`) overriding `intro` to manual skip.
pub fn config_with_channel() -> Config {
    let mut config = Config::default();
    config.ensure_channel("chanA");
    if let Some(settings) = config.channel_specific_settings.get_mut("chanA") {
        settings.category_selections.push(CategorySelection::new(
            Category::Intro,
            CategorySkipOption::ManualSkip,
        ));
    }
    config
}

/// Path of a not-yet-existing `config.yaml` inside a fresh temp dir.
///
/// Keep the `TempDir` alive until all config I/O has completed.
pub fn config_file_in_tmp_dir() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("skipprefs").join("config.yaml");
    (path, temp_dir)
}

/// Run the CLI against `config_path` and return what it printed.
pub fn run_cli(config_path: &std::path::Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["skipprefs"];
    argv.extend_from_slice(args);
    let config_arg = config_path.to_string_lossy().into_owned();
    argv.push("--config");
    argv.push(&config_arg);

    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    run(cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}
