//! Built-in English message table.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::traits::Localizer;

static MESSAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Categories
        ("category_sponsor", "Sponsor"),
        (
            "category_sponsor_description",
            "Paid promotion, paid referrals and direct advertisements. Not for self-promotion or free shoutouts to causes/creators/websites/products they like.",
        ),
        ("category_selfpromo", "Unpaid/Self Promotion"),
        (
            "category_selfpromo_description",
            "Similar to \"sponsor\" except for unpaid or self promotion. This includes sections about merchandise, donations, or information about who they collaborated with.",
        ),
        ("category_exclusive_access", "Exclusive Access"),
        (
            "category_exclusive_access_description",
            "Only for labeling entire videos. Used when a video showcases a product, service or location that they've received free or subsidized access to.",
        ),
        ("category_interaction", "Interaction Reminder (Subscribe)"),
        (
            "category_interaction_description",
            "When there is a short reminder to like, subscribe or follow them in the middle of content.",
        ),
        ("category_intro", "Intermission/Intro Animation"),
        (
            "category_intro_description",
            "An interval without actual content. Could be a pause, static frame, repeating animation.",
        ),
        ("category_outro", "Endcards/Credits"),
        (
            "category_outro_description",
            "Credits or when the YouTube endcards appear. Not for conclusions with information.",
        ),
        ("category_preview", "Preview/Recap"),
        (
            "category_preview_description",
            "Collection of clips that show what is coming up or what happened in the video or in other videos of a series, where all information is repeated elsewhere.",
        ),
        ("category_hook", "Hook/Greetings"),
        (
            "category_hook_description",
            "Narrated trailers for the upcoming video, greetings and goodbyes.",
        ),
        ("category_music_offtopic", "Music: Non-Music Section"),
        (
            "category_music_offtopic_description",
            "Only for use in music videos. Covers sections of music videos that aren't already covered by another category.",
        ),
        ("category_filler", "Filler Tangent/Jokes"),
        (
            "category_filler_description",
            "Tangential scenes added only for filler or humor that are not required to understand the main content of the video.",
        ),
        ("category_poi_highlight", "Highlight"),
        (
            "category_poi_highlight_description",
            "The part of the video that most people are looking for.",
        ),
        ("category_chapter", "Chapter"),
        (
            "category_chapter_description",
            "Custom named chapters describing major sections of a video.",
        ),
        // Skip options
        ("inherit", "Use Default"),
        ("disable", "Disable"),
        ("showOverlay", "Show In Seek Bar"),
        ("manualSkip", "Manual Skip"),
        ("autoSkip", "Auto Skip"),
        ("showOverlay_POI", "Show In Seek Bar"),
        ("manualSkip_POI", "Ask When Video Loads"),
        ("autoSkip_POI", "Auto Skip To Start"),
        ("showOverlay_full", "Show Label"),
        // Misc
        ("LearnMore", "Learn More"),
    ])
});

/// English strings; unknown keys are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn get_message(&self, key: &str) -> String {
        match MESSAGES.get(key) {
            Some(message) => (*message).to_string(),
            None => {
                log::debug!("No English message for '{key}'");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipprefs_config::Category;

    #[test]
    fn test_every_category_has_label_and_description() {
        for category in Category::all() {
            for key in [
                format!("category_{category}"),
                format!("category_{category}_description"),
            ] {
                assert!(MESSAGES.contains_key(key.as_str()), "missing {key}");
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(EnglishLocalizer.get_message("nope"), "nope");
    }
}
