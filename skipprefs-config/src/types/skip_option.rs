//! Skip options, stored selections, and scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use crate::error::ConfigError;

/// How segments of a category are handled during playback.
///
/// This is the stored value; "inherit" is a resolution concept and is
/// represented separately by [`SkipChoice::Inherit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySkipOption {
    /// Segments are ignored entirely
    Disabled,
    /// Segments are drawn on the progress bar only
    ShowOverlay,
    /// A skip button is shown
    ManualSkip,
    /// Segments are skipped without asking
    AutoSkip,
}

impl CategorySkipOption {
    /// All options in the order they are offered
    pub fn all() -> &'static [CategorySkipOption] {
        &[
            CategorySkipOption::Disabled,
            CategorySkipOption::ShowOverlay,
            CategorySkipOption::ManualSkip,
            CategorySkipOption::AutoSkip,
        ]
    }

    /// Raw value used by option selectors and as the base message key
    pub fn option_name(&self) -> &'static str {
        match self {
            CategorySkipOption::Disabled => "disable",
            CategorySkipOption::ShowOverlay => "showOverlay",
            CategorySkipOption::ManualSkip => "manualSkip",
            CategorySkipOption::AutoSkip => "autoSkip",
        }
    }

    /// Whether this option skips segments (manually or automatically)
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            CategorySkipOption::ManualSkip | CategorySkipOption::AutoSkip
        )
    }
}

/// A choice in an option selector, and the result of resolving a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipChoice {
    /// Defer to the global setting (channel scope only)
    Inherit,
    /// A concrete stored option
    Option(CategorySkipOption),
}

impl SkipChoice {
    pub const INHERIT_NAME: &'static str = "inherit";

    /// Raw value used by option selectors
    pub fn option_name(&self) -> &'static str {
        match self {
            SkipChoice::Inherit => Self::INHERIT_NAME,
            SkipChoice::Option(option) => option.option_name(),
        }
    }

    /// The concrete option, or `None` for `Inherit`
    pub fn as_option(&self) -> Option<CategorySkipOption> {
        match self {
            SkipChoice::Inherit => None,
            SkipChoice::Option(option) => Some(*option),
        }
    }
}

impl From<CategorySkipOption> for SkipChoice {
    fn from(option: CategorySkipOption) -> Self {
        SkipChoice::Option(option)
    }
}

impl fmt::Display for SkipChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name())
    }
}

impl FromStr for SkipChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::INHERIT_NAME {
            return Ok(SkipChoice::Inherit);
        }
        CategorySkipOption::all()
            .iter()
            .find(|o| o.option_name() == s)
            .map(|o| SkipChoice::Option(*o))
            .ok_or_else(|| ConfigError::UnknownOption(s.to_string()))
    }
}

/// One explicit category-to-option entry in an override list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    #[serde(rename = "name", alias = "category")]
    pub category: Category,
    pub option: CategorySkipOption,
}

impl CategorySelection {
    pub fn new(category: Category, option: CategorySkipOption) -> Self {
        Self { category, option }
    }
}

/// The level at which a preference is read or written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The global defaults
    Global,
    /// Overrides for one channel, keyed by channel id
    Channel(String),
}

impl Scope {
    /// Build a scope from an optional selected channel (`None` = global)
    pub fn from_channel(channel: Option<&str>) -> Self {
        match channel {
            Some(id) => Scope::Channel(id.to_string()),
            None => Scope::Global,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

    pub fn channel(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Channel(id) => Some(id),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Channel(id) => write!(f, "channel '{id}'"),
        }
    }
}
