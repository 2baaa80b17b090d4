//! Segment categories and their per-category capabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Content category a segment can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Paid promotion or paid referral
    Sponsor,
    /// Unpaid promotion of the creator's own products or channels
    Selfpromo,
    /// The whole video showcases a product the creator was given access to
    ExclusiveAccess,
    /// Reminder to like, subscribe or follow
    Interaction,
    /// Intro animation or opening cards
    Intro,
    /// Endcards and credits
    Outro,
    /// Recap or preview of other content
    Preview,
    /// Teaser at the start meant to hook the viewer
    Hook,
    /// Non-music section in a music video
    MusicOfftopic,
    /// Tangents and jokes not required to understand the video
    Filler,
    /// The part of the video most people are looking for
    PoiHighlight,
    /// Chapter labels
    Chapter,
}

/// What a category allows beyond the basic overlay.
///
/// All per-category exceptions are read from [`Category::capabilities`] so a
/// new exception is a single edit there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCapabilities {
    /// Manual and automatic skipping are offered
    pub supports_skip: bool,
    /// A second bar color is used while previewing
    pub has_preview_color: bool,
}

impl Category {
    /// All categories, in settings-page order
    pub fn all() -> &'static [Category] {
        &[
            Category::Sponsor,
            Category::Selfpromo,
            Category::ExclusiveAccess,
            Category::Interaction,
            Category::PoiHighlight,
            Category::Intro,
            Category::Outro,
            Category::Preview,
            Category::Hook,
            Category::Filler,
            Category::MusicOfftopic,
            Category::Chapter,
        ]
    }

    /// Identifier used in storage, message keys and color-map keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sponsor => "sponsor",
            Category::Selfpromo => "selfpromo",
            Category::ExclusiveAccess => "exclusive_access",
            Category::Interaction => "interaction",
            Category::Intro => "intro",
            Category::Outro => "outro",
            Category::Preview => "preview",
            Category::Hook => "hook",
            Category::MusicOfftopic => "music_offtopic",
            Category::Filler => "filler",
            Category::PoiHighlight => "poi_highlight",
            Category::Chapter => "chapter",
        }
    }

    pub fn capabilities(&self) -> CategoryCapabilities {
        match self {
            Category::ExclusiveAccess => CategoryCapabilities {
                supports_skip: false,
                has_preview_color: false,
            },
            _ => CategoryCapabilities {
                supports_skip: true,
                has_preview_color: true,
            },
        }
    }

    /// Suffix appended to skip-option message keys for this category.
    ///
    /// Point-of-interest categories use `_POI` and full-video labels use
    /// `_full`; everything else has no suffix.
    pub fn message_suffix(&self) -> &'static str {
        if self.as_str().starts_with("poi_") {
            "_POI"
        } else if *self == Category::ExclusiveAccess {
            "_full"
        } else {
            ""
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}
