//! Core `Config` struct definition.

use crate::types::{BarType, CategorySelection, LogLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overrides that apply to a single channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSettings {
    /// Ordered override list; at most one entry per category
    #[serde(default)]
    pub category_selections: Vec<CategorySelection>,
}

/// Skip preferences and their display colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Skip Options
    // ========================================================================
    /// Global override list; categories without an entry are disabled
    #[serde(default = "crate::defaults::category_selections")]
    pub category_selections: Vec<CategorySelection>,

    /// Per-channel override lists, keyed by channel id.
    /// Channels with no explicit settings are absent rather than empty.
    #[serde(default)]
    pub channel_specific_settings: BTreeMap<String, ChannelSettings>,

    // ========================================================================
    // Bar Colors
    // ========================================================================
    /// Progress-bar colors keyed by `category` or `preview-<category>`
    #[serde(default = "crate::defaults::bar_types")]
    pub bar_types: BTreeMap<String, BarType>,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Log level for the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category_selections: crate::defaults::category_selections(),
            channel_specific_settings: BTreeMap::new(),
            bar_types: crate::defaults::bar_types(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for one channel, if the channel has been configured
    pub fn channel_settings(&self, channel: &str) -> Option<&ChannelSettings> {
        self.channel_specific_settings.get(channel)
    }

    /// Make sure `channel` has an entry in `channel_specific_settings`.
    ///
    /// Returns `true` when a new, empty entry was created.
    pub fn ensure_channel(&mut self, channel: &str) -> bool {
        if self.channel_specific_settings.contains_key(channel) {
            return false;
        }
        self.channel_specific_settings
            .insert(channel.to_string(), ChannelSettings::default());
        true
    }
}
