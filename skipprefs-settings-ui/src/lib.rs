//! Settings UI for skipprefs.
//!
//! Framework-neutral view models for the category skip options settings.
//! Display text comes from the host through the [`Localizer`] trait and edits
//! are committed through any [`skipprefs_config::ConfigStore`].

// Trait interfaces for decoupling from the host application
mod traits;
pub use traits::*;

// Built-in English strings
pub mod messages;
pub use messages::EnglishLocalizer;

// Per-category skip option row
pub mod category_skip_options;
pub use category_skip_options::{
    CategoryRowView, CategorySkipOptions, CategorySkipOptionsProps, ChoiceView,
};
