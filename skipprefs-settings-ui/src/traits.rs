//! Trait definitions for settings UI dependencies.
//!
//! The settings views never hard-code display text. The host application
//! implements [`Localizer`] to supply strings in the user's language.

/// Localized string lookup.
pub trait Localizer {
    /// Display string for `key`.
    ///
    /// Implementations should return something displayable (the key itself
    /// is fine) rather than an empty string when a key is missing.
    fn get_message(&self, key: &str) -> String;
}

impl<L: Localizer + ?Sized> Localizer for &L {
    fn get_message(&self, key: &str) -> String {
        (**self).get_message(key)
    }
}
