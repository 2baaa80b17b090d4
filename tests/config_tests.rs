use skipprefs::config::{
    Category, CategorySelection, CategorySkipOption, Config, ConfigError, LogLevel,
};
use std::fs;

mod common;
use common::config_file_in_tmp_dir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.category_selections.len(), 3);
    assert!(config.channel_specific_settings.is_empty());
    assert_eq!(config.log_level, LogLevel::Off);
    assert_eq!(config.bar_types["sponsor"].color, "#00d400");
    assert_eq!(config.bar_types["sponsor"].opacity, "0.7");
    assert_eq!(config.bar_types["filler"].opacity, "0.9");
    assert!(!config.bar_types.contains_key("preview-exclusive_access"));
}

#[test]
fn test_missing_file_creates_defaults() {
    let (path, _tmp) = config_file_in_tmp_dir();
    assert!(!path.exists());

    let config = Config::load_from(&path).expect("load");
    assert!(path.exists(), "default config written to disk");
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_reload_preserves_overrides() {
    let (path, _tmp) = config_file_in_tmp_dir();
    let mut config = Config::default();
    config.ensure_channel("chanA");
    config
        .channel_specific_settings
        .get_mut("chanA")
        .expect("channel")
        .category_selections
        .push(CategorySelection::new(
            Category::Selfpromo,
            CategorySkipOption::ManualSkip,
        ));
    config.save_to(&path).expect("save");

    let loaded = Config::load_from(&path).expect("load");
    assert_eq!(loaded, config);
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let (path, _tmp) = config_file_in_tmp_dir();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(
        &path,
        "category_selections:\n  - name: intro\n    option: auto_skip\nlog_level: debug\n",
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(
        config.category_selections,
        vec![CategorySelection::new(
            Category::Intro,
            CategorySkipOption::AutoSkip
        )]
    );
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.bar_types, Config::default().bar_types);
}

#[test]
fn test_duplicate_entries_repaired_on_load() {
    let (path, _tmp) = config_file_in_tmp_dir();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(
        &path,
        "category_selections:\n  - name: sponsor\n    option: manual_skip\n  - name: sponsor\n    option: auto_skip\n",
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(
        config.category_selections,
        vec![CategorySelection::new(
            Category::Sponsor,
            CategorySkipOption::ManualSkip
        )]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let (path, _tmp) = config_file_in_tmp_dir();
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, "category_selections: [unclosed\n").expect("write");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_validate_rejects_bad_color() {
    let mut config = Config::default();
    if let Some(bar) = config.bar_types.get_mut("outro") {
        bar.color = "blue".to_string();
    }
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}
