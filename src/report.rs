//! Plain-text rendering of category rows for the command line.

use skipprefs_config::{Category, Config, Scope, resolve_applied_option};
use skipprefs_settings_ui::{CategorySkipOptions, CategorySkipOptionsProps, Localizer};
use std::io::{self, Write};

fn props(category: Category, scope: &Scope) -> CategorySkipOptionsProps {
    let props = CategorySkipOptionsProps::new(category);
    match scope.channel() {
        Some(channel) => props.with_channel(channel),
        None => props,
    }
}

/// One line per category: label, selected choice, the option that applies
/// during playback and (globally) the bar colors.
pub fn write_table(
    out: &mut dyn Write,
    config: &Config,
    scope: &Scope,
    localizer: &dyn Localizer,
) -> io::Result<()> {
    writeln!(out, "Skip options ({scope})")?;
    for category in Category::all() {
        let row = CategorySkipOptions::new(props(*category, scope), config);
        let view = row.view(config, localizer);
        let applied = resolve_applied_option(config, *category, scope.channel());

        let mut line = format!(
            "{:<18} {:<34} {:<12} -> {:<12}",
            category.as_str(),
            view.label,
            view.selected.option_name(),
            applied.option_name()
        );
        if view.show_color_inputs {
            line.push_str(&format!(" {}", view.color));
            if let Some(preview) = &view.preview_color {
                line.push_str(&format!(" / {preview}"));
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Selectable choices for one category, current one marked with `*`.
pub fn write_choices(
    out: &mut dyn Write,
    config: &Config,
    category: Category,
    scope: &Scope,
    localizer: &dyn Localizer,
) -> io::Result<()> {
    let row = CategorySkipOptions::new(props(category, scope), config);
    let view = row.view(config, localizer);
    writeln!(out, "{} ({scope})", view.label)?;
    writeln!(out, "  {}", view.description)?;
    for choice in &view.choices {
        let marker = if choice.choice == view.selected { '*' } else { ' ' };
        writeln!(out, "{marker} {:<12} {}", choice.value, choice.label)?;
    }
    writeln!(out, "{}: {}", view.learn_more_label, view.learn_more_url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skipprefs_settings_ui::EnglishLocalizer;

    fn render_table(config: &Config, scope: &Scope) -> String {
        let mut out = Vec::new();
        write_table(&mut out, config, scope, &EnglishLocalizer).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_global_table_lists_every_category_with_colors() {
        let text = render_table(&Config::default(), &Scope::Global);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), Category::all().len() + 1);
        let sponsor = lines.iter().find(|l| l.starts_with("sponsor ")).unwrap();
        assert!(sponsor.contains("autoSkip"));
        assert!(sponsor.ends_with("#00d400 / #007800"));
        let exclusive = lines
            .iter()
            .find(|l| l.starts_with("exclusive_access"))
            .unwrap();
        assert!(exclusive.ends_with("#008a5c"));
    }

    #[test]
    fn test_channel_table_shows_inherit_and_applied_option() {
        let mut config = Config::default();
        config.ensure_channel("chanA");
        let text = render_table(&config, &Scope::Channel("chanA".to_string()));
        let sponsor = text.lines().find(|l| l.starts_with("sponsor ")).unwrap();
        assert!(sponsor.contains("inherit"));
        assert!(sponsor.contains("-> autoSkip"));
        assert!(!sponsor.contains('#'));
    }

    #[test]
    fn test_choices_mark_current() {
        let mut out = Vec::new();
        write_choices(
            &mut out,
            &Config::default(),
            Category::PoiHighlight,
            &Scope::Global,
            &EnglishLocalizer,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("* manualSkip   Ask When Video Loads"));
        assert!(text.contains("  disable      Disable"));
        assert!(text.ends_with("Learn More: https://wiki.sponsor.ajay.app/w/Highlight\n"));
    }
}
