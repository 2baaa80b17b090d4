//! Selection editor and selectable-choice enumeration.
//!
//! An edit copies the scope's override list, removes the category's entry,
//! appends the new one (unless the choice is `Inherit`), and commits the
//! fresh list through [`ConfigStore::set`]. Channel edits also re-assign the
//! parent `channel_specific_settings` map so observers of that field fire.

use crate::error::ConfigError;
use crate::resolve::selections_for;
use crate::store::{ConfigStore, FieldUpdate};
use crate::types::{Category, CategorySelection, CategorySkipOption, Scope, SkipChoice};

/// Choices offered for `category` in `scope`, in display order.
///
/// `Inherit` leads the list in a channel scope and is never offered
/// globally; categories that cannot be skipped stop after `ShowOverlay`.
pub fn selectable_choices(category: Category, scope: &Scope) -> Vec<SkipChoice> {
    let mut choices = Vec::with_capacity(5);
    if !scope.is_global() {
        choices.push(SkipChoice::Inherit);
    }
    choices.extend(
        CategorySkipOption::all()
            .iter()
            .filter(|o| category.capabilities().supports_skip || !o.is_skip())
            .map(|o| SkipChoice::Option(*o)),
    );
    choices
}

/// Apply a user's choice for `category` in `scope` and commit it.
///
/// Choices that [`selectable_choices`] would not offer are rejected before
/// anything is changed.
pub fn apply_selection<S: ConfigStore + ?Sized>(
    store: &mut S,
    category: Category,
    scope: &Scope,
    choice: SkipChoice,
) -> Result<(), ConfigError> {
    match choice {
        SkipChoice::Inherit if scope.is_global() => return Err(ConfigError::InheritAtGlobalScope),
        SkipChoice::Option(option)
            if option.is_skip() && !category.capabilities().supports_skip =>
        {
            return Err(ConfigError::UnsupportedOption { category, option });
        }
        _ => {}
    }

    if let Scope::Channel(channel) = scope
        && store.config().channel_settings(channel).is_none()
    {
        return Err(ConfigError::UnknownChannel(channel.clone()));
    }

    let mut selections = selections_for(store.config(), scope).to_vec();
    if let Some(index) = selections.iter().position(|s| s.category == category) {
        selections.remove(index);
    }
    if let SkipChoice::Option(option) = choice {
        selections.push(CategorySelection::new(category, option));
    }

    log::debug!("Setting {category} to {choice} ({scope})");

    match scope {
        Scope::Global => store.set(FieldUpdate::CategorySelections(selections)),
        Scope::Channel(channel) => {
            // Both fields are assigned even if persisting the list fails;
            // the first error is returned.
            let listed = store.set(FieldUpdate::ChannelCategorySelections {
                channel: channel.clone(),
                selections,
            });
            let parent = store.config().channel_specific_settings.clone();
            let committed = store.set(FieldUpdate::ChannelSpecificSettings(parent));
            listed.and(committed)
        }
    }
}
