//! Skip option row for a single category.
//!
//! Shows the category's label and description, an option selector whose
//! choices depend on the category and on whether a channel is selected, and
//! (globally only) the bar and preview bar colors. User input is routed into
//! the config editors, which commit through the store.

use skipprefs_config::{
    Category, Config, ConfigError, ConfigStore, Scope, SkipChoice, apply_bar_color,
    apply_selection, resolve_bar_colors, resolve_effective_option, selectable_choices, wiki_link,
};

use crate::traits::Localizer;

/// Inputs fixed for the lifetime of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySkipOptionsProps {
    pub category: Category,
    /// Channel being configured; `None` edits the global settings
    pub selected_channel: Option<String>,
    /// Used when the config has no bar color for the category
    pub default_color: Option<String>,
    /// Used when the config has no preview bar color for the category
    pub default_preview_color: Option<String>,
}

impl CategorySkipOptionsProps {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            selected_channel: None,
            default_color: None,
            default_preview_color: None,
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.selected_channel = Some(channel.into());
        self
    }
}

/// One entry of the option selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub choice: SkipChoice,
    /// Raw value reported back through `on_option_change`
    pub value: &'static str,
    pub label: String,
}

/// Everything needed to draw the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRowView {
    pub category: Category,
    pub label: String,
    pub description: String,
    pub learn_more_label: String,
    pub learn_more_url: &'static str,
    /// Choice the selector starts on
    pub selected: SkipChoice,
    pub choices: Vec<ChoiceView>,
    /// Color inputs are only shown for the global settings
    pub show_color_inputs: bool,
    pub color: String,
    /// `None` when the category has no preview color
    pub preview_color: Option<String>,
}

/// Controller for one category row.
#[derive(Debug, Clone)]
pub struct CategorySkipOptions {
    props: CategorySkipOptionsProps,
    color: String,
    preview_color: Option<String>,
}

impl CategorySkipOptions {
    /// Create the row, reading the initial colors from `config`
    pub fn new(props: CategorySkipOptionsProps, config: &Config) -> Self {
        let colors = resolve_bar_colors(
            config,
            props.category,
            props.default_color.as_deref(),
            props.default_preview_color.as_deref(),
        );
        Self {
            props,
            color: colors.color,
            preview_color: colors.preview_color,
        }
    }

    pub fn props(&self) -> &CategorySkipOptionsProps {
        &self.props
    }

    pub fn scope(&self) -> Scope {
        Scope::from_channel(self.props.selected_channel.as_deref())
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn preview_color(&self) -> Option<&str> {
        self.preview_color.as_deref()
    }

    /// Choice currently in effect for this row's scope
    pub fn selected(&self, config: &Config) -> SkipChoice {
        resolve_effective_option(config, self.props.category, &self.scope())
    }

    /// Selector entries with their localized labels
    pub fn choices(&self, localizer: &dyn Localizer) -> Vec<ChoiceView> {
        selectable_choices(self.props.category, &self.scope())
            .into_iter()
            .map(|choice| ChoiceView {
                choice,
                value: choice.option_name(),
                label: localizer.get_message(&self.choice_message_key(choice)),
            })
            .collect()
    }

    /// Message key for a choice label.
    ///
    /// `inherit` and `disable` read the same for every category; the others
    /// carry the category's suffix.
    fn choice_message_key(&self, choice: SkipChoice) -> String {
        let name = choice.option_name();
        match choice {
            SkipChoice::Inherit
            | SkipChoice::Option(skipprefs_config::CategorySkipOption::Disabled) => {
                name.to_string()
            }
            SkipChoice::Option(_) => format!("{name}{}", self.props.category.message_suffix()),
        }
    }

    pub fn view(&self, config: &Config, localizer: &dyn Localizer) -> CategoryRowView {
        let category = self.props.category;
        CategoryRowView {
            category,
            label: localizer.get_message(&format!("category_{category}")),
            description: localizer.get_message(&format!("category_{category}_description")),
            learn_more_label: localizer.get_message("LearnMore"),
            learn_more_url: wiki_link(category),
            selected: self.selected(config),
            choices: self.choices(localizer),
            show_color_inputs: self.props.selected_channel.is_none(),
            color: self.color.clone(),
            preview_color: self.preview_color.clone(),
        }
    }

    /// Handle a new selector value (`inherit`, `disable`, `showOverlay`, ...)
    pub fn on_option_change<S: ConfigStore + ?Sized>(
        &self,
        store: &mut S,
        raw_value: &str,
    ) -> Result<(), ConfigError> {
        let choice: SkipChoice = raw_value.parse()?;
        apply_selection(store, self.props.category, &self.scope(), choice)
    }

    /// Handle a new value from the bar color (or preview bar color) input.
    ///
    /// Color inputs exist only in the global settings; edits made while a
    /// channel is selected are rejected.
    pub fn on_color_change<S: ConfigStore + ?Sized>(
        &mut self,
        store: &mut S,
        value: &str,
        is_preview: bool,
    ) -> Result<(), ConfigError> {
        if let Some(channel) = &self.props.selected_channel {
            log::warn!("Ignoring {} color edit for channel '{channel}'", self.props.category);
            return Err(ConfigError::ColorOutsideGlobalScope(channel.clone()));
        }
        apply_bar_color(store, self.props.category, value, is_preview)?;
        if is_preview {
            self.preview_color = Some(value.to_string());
        } else {
            self.color = value.to_string();
        }
        Ok(())
    }
}
