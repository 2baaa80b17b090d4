//! Progress-bar color entries.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Color and opacity used to draw a category's segments on the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarType {
    /// Hex color code (e.g. "#00d400")
    pub color: String,
    /// Opacity as a decimal string (e.g. "0.7")
    #[serde(default = "crate::defaults::bar_opacity")]
    pub opacity: String,
}

impl BarType {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            opacity: crate::defaults::bar_opacity(),
        }
    }
}

/// Key into the bar color map: `category` or `preview-<category>`.
pub fn bar_type_key(category: Category, preview: bool) -> String {
    if preview {
        format!("preview-{}", category.as_str())
    } else {
        category.as_str().to_string()
    }
}
