//! Default values for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on `Config`
//! fields and by `Config::default()`.

use std::collections::BTreeMap;

use crate::types::{BarType, Category, CategorySelection, CategorySkipOption, bar_type_key};

pub fn bar_opacity() -> String {
    "0.7".to_string()
}

/// Global selections a fresh install starts with
pub fn category_selections() -> Vec<CategorySelection> {
    vec![
        CategorySelection::new(Category::Sponsor, CategorySkipOption::AutoSkip),
        CategorySelection::new(Category::PoiHighlight, CategorySkipOption::ManualSkip),
        CategorySelection::new(Category::ExclusiveAccess, CategorySkipOption::ShowOverlay),
    ]
}

/// Built-in bar color for a category (`preview` selects the preview color).
///
/// Returns `None` for a preview color the category does not have.
pub fn bar_color(category: Category, preview: bool) -> Option<&'static str> {
    if preview && !category.capabilities().has_preview_color {
        return None;
    }
    let (color, preview_color) = match category {
        Category::Sponsor => ("#00d400", "#007800"), // Green
        Category::Selfpromo => ("#ffff00", "#bfbf35"), // Yellow
        Category::ExclusiveAccess => ("#008a5c", ""), // Teal, no preview
        Category::Interaction => ("#cc00ff", "#6c0087"), // Purple
        Category::Intro => ("#00ffff", "#008080"),   // Cyan
        Category::Outro => ("#0202ed", "#000070"),   // Blue
        Category::Preview => ("#008fd6", "#005799"), // Light blue
        Category::Hook => ("#395699", "#27397d"),    // Slate
        Category::MusicOfftopic => ("#ff9900", "#a6634a"), // Orange
        Category::Filler => ("#7300ff", "#2e0066"),  // Violet
        Category::PoiHighlight => ("#ff1684", "#9b044c"), // Pink
        Category::Chapter => ("#ffd679", "#96804a"), // Sand
    };
    Some(if preview { preview_color } else { color })
}

/// Default bar color map, keyed by `category` and `preview-<category>`
pub fn bar_types() -> BTreeMap<String, BarType> {
    let mut map = BTreeMap::new();
    for category in Category::all() {
        for preview in [false, true] {
            if let Some(color) = bar_color(*category, preview) {
                let mut bar_type = BarType::new(color);
                // Filler reads better slightly more opaque
                if *category == Category::Filler && !preview {
                    bar_type.opacity = "0.9".to_string();
                }
                map.insert(bar_type_key(*category, preview), bar_type);
            }
        }
    }
    map
}
