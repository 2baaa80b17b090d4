//! Integrity checks for override lists and bar colors.

use super::config_struct::Config;
use crate::error::ConfigError;
use crate::types::CategorySelection;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
});

/// Whether `value` is a `#rgb` or `#rrggbb` hex color
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Remove later entries for a category that already appeared.
///
/// Returns the number of entries removed.
fn dedupe(selections: &mut Vec<CategorySelection>) -> usize {
    let before = selections.len();
    let mut seen = HashSet::new();
    selections.retain(|s| seen.insert(s.category));
    before - selections.len()
}

fn first_duplicate(selections: &[CategorySelection]) -> Option<&CategorySelection> {
    let mut seen = HashSet::new();
    selections.iter().find(|s| !seen.insert(s.category))
}

impl Config {
    /// Check that every override list holds at most one entry per category
    /// and that every bar color is a hex code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dup) = first_duplicate(&self.category_selections) {
            return Err(ConfigError::Validation(format!(
                "category_selections has more than one entry for '{}'",
                dup.category
            )));
        }
        for (channel, settings) in &self.channel_specific_settings {
            if let Some(dup) = first_duplicate(&settings.category_selections) {
                return Err(ConfigError::Validation(format!(
                    "channel '{channel}' has more than one entry for '{}'",
                    dup.category
                )));
            }
        }
        for (key, bar_type) in &self.bar_types {
            if !is_hex_color(&bar_type.color) {
                return Err(ConfigError::Validation(format!(
                    "bar_types.{key}.color '{}' is not a hex color",
                    bar_type.color
                )));
            }
        }
        Ok(())
    }

    /// Validate a freshly loaded config, then repair duplicate entries.
    ///
    /// Returns the validation result from before the repair.
    pub fn validate_and_repair(&mut self) -> Result<(), ConfigError> {
        let checked = self.validate();
        self.dedupe_selections();
        checked
    }

    /// Drop duplicate override entries in every scope, keeping the first.
    pub fn dedupe_selections(&mut self) {
        let removed = dedupe(&mut self.category_selections);
        if removed > 0 {
            log::warn!("Removed {removed} duplicate global category selection(s)");
        }
        for (channel, settings) in self.channel_specific_settings.iter_mut() {
            let removed = dedupe(&mut settings.category_selections);
            if removed > 0 {
                log::warn!("Removed {removed} duplicate selection(s) for channel '{channel}'");
            }
        }
    }
}
