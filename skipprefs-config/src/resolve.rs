//! Effective skip option resolution.
//!
//! A scope's override list is scanned for the category; when no entry exists
//! the scope's structural default applies: `Disabled` for the global scope,
//! `Inherit` for a channel.

use crate::config::Config;
use crate::types::{Category, CategorySelection, CategorySkipOption, Scope, SkipChoice};

/// Override list for a scope.
///
/// A channel that has not been configured has no overrides.
pub(crate) fn selections_for<'a>(config: &'a Config, scope: &Scope) -> &'a [CategorySelection] {
    match scope {
        Scope::Global => &config.category_selections,
        Scope::Channel(channel) => config
            .channel_settings(channel)
            .map(|s| s.category_selections.as_slice())
            .unwrap_or(&[]),
    }
}

/// Resolve the option shown for `category` in `scope`.
///
/// Returns `SkipChoice::Inherit` only for a channel scope with no entry for
/// the category.
pub fn resolve_effective_option(config: &Config, category: Category, scope: &Scope) -> SkipChoice {
    let default = match scope {
        Scope::Global => SkipChoice::Option(CategorySkipOption::Disabled),
        Scope::Channel(_) => SkipChoice::Inherit,
    };

    selections_for(config, scope)
        .iter()
        .find(|s| s.category == category)
        .map(|s| SkipChoice::Option(s.option))
        .unwrap_or(default)
}

/// Resolve the option that actually governs playback for `category`.
///
/// A channel's `Inherit` falls through to the global scope.
pub fn resolve_applied_option(
    config: &Config,
    category: Category,
    channel: Option<&str>,
) -> CategorySkipOption {
    if let Some(channel) = channel {
        let scope = Scope::Channel(channel.to_string());
        if let SkipChoice::Option(option) = resolve_effective_option(config, category, &scope) {
            return option;
        }
    }
    match resolve_effective_option(config, category, &Scope::Global) {
        SkipChoice::Option(option) => option,
        SkipChoice::Inherit => CategorySkipOption::Disabled,
    }
}
