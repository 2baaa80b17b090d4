//! External documentation links per category.

use crate::types::Category;

/// Wiki page describing `category`
pub fn wiki_link(category: Category) -> &'static str {
    match category {
        Category::Sponsor => "https://wiki.sponsor.ajay.app/w/Sponsor",
        Category::Selfpromo => "https://wiki.sponsor.ajay.app/w/Unpaid/Self_Promotion",
        Category::ExclusiveAccess => "https://wiki.sponsor.ajay.app/w/Exclusive_Access",
        Category::Interaction => {
            "https://wiki.sponsor.ajay.app/w/Interaction_Reminder_(Subscribe)"
        }
        Category::Intro => "https://wiki.sponsor.ajay.app/w/Intermission/Intro_Animation",
        Category::Outro => "https://wiki.sponsor.ajay.app/w/Endcards/Credits",
        Category::Preview => "https://wiki.sponsor.ajay.app/w/Preview/Recap",
        Category::Hook => "https://wiki.sponsor.ajay.app/w/Hook/Greetings",
        Category::MusicOfftopic => "https://wiki.sponsor.ajay.app/w/Music:_Non-Music_Section",
        Category::Filler => "https://wiki.sponsor.ajay.app/w/Filler_Tangent",
        Category::PoiHighlight => "https://wiki.sponsor.ajay.app/w/Highlight",
        Category::Chapter => "https://wiki.sponsor.ajay.app/w/Chapter",
    }
}
