//! Bar color resolution and editing.
//!
//! Each category has a bar color and, unless its capabilities say otherwise,
//! a second color used while previewing. Colors live in `Config::bar_types`
//! keyed by `category` / `preview-<category>`; edits are a direct keyed update
//! followed by re-assigning the whole map.

use crate::config::{Config, is_hex_color};
use crate::error::ConfigError;
use crate::store::{ConfigStore, FieldUpdate};
use crate::types::{BarType, Category, bar_type_key};

/// Colors displayed for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarColors {
    pub color: String,
    /// `None` when the category has no preview color
    pub preview_color: Option<String>,
}

fn stored_or(config: &Config, category: Category, preview: bool, fallback: Option<&str>) -> String {
    config
        .bar_types
        .get(&bar_type_key(category, preview))
        .map(|b| b.color.clone())
        .or_else(|| fallback.map(str::to_string))
        .or_else(|| crate::defaults::bar_color(category, preview).map(str::to_string))
        .unwrap_or_default()
}

/// Read the colors for `category`.
///
/// Missing entries fall back to the caller's defaults, then to the built-in
/// palette.
pub fn resolve_bar_colors(
    config: &Config,
    category: Category,
    default_color: Option<&str>,
    default_preview_color: Option<&str>,
) -> BarColors {
    let color = stored_or(config, category, false, default_color);
    let preview_color = category
        .capabilities()
        .has_preview_color
        .then(|| stored_or(config, category, true, default_preview_color));
    BarColors {
        color,
        preview_color,
    }
}

/// Set the bar (or preview bar) color of `category` and commit `bar_types`.
pub fn apply_bar_color<S: ConfigStore + ?Sized>(
    store: &mut S,
    category: Category,
    value: &str,
    is_preview: bool,
) -> Result<(), ConfigError> {
    if is_preview && !category.capabilities().has_preview_color {
        return Err(ConfigError::NoPreviewColor(category));
    }
    if !is_hex_color(value) {
        return Err(ConfigError::InvalidColor(value.to_string()));
    }

    let key = bar_type_key(category, is_preview);
    let mut bar_types = store.config().bar_types.clone();
    bar_types
        .entry(key.clone())
        .and_modify(|b| b.color = value.to_string())
        .or_insert_with(|| BarType::new(value));

    log::debug!("Setting bar color {key} to {value}");
    store.set(FieldUpdate::BarTypes(bar_types))
}
