//! Subcommands run end to end against a temporary config file.

use skipprefs::config::{Category, CategorySkipOption, Config, resolve_applied_option};

mod common;
use common::{config_file_in_tmp_dir, run_cli};

#[test]
fn test_show_creates_config_and_lists_categories() {
    let (path, _tmp) = config_file_in_tmp_dir();
    let out = run_cli(&path, &["show"]).expect("show");

    assert!(path.exists());
    assert!(out.starts_with("Skip options (global)"));
    assert_eq!(out.lines().count(), Category::all().len() + 1);
}

#[test]
fn test_set_then_show_in_channel() {
    let (path, _tmp) = config_file_in_tmp_dir();
    run_cli(&path, &["add-channel", "chanA"]).expect("add");
    let out = run_cli(
        &path,
        &["set", "selfpromo", "manualSkip", "--channel", "chanA"],
    )
    .expect("set");
    assert_eq!(out, "selfpromo (channel 'chanA'): manualSkip\n");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(
        resolve_applied_option(&config, Category::Selfpromo, Some("chanA")),
        CategorySkipOption::ManualSkip
    );

    let shown = run_cli(&path, &["show", "--channel", "chanA"]).expect("show");
    let line = shown
        .lines()
        .find(|l| l.starts_with("selfpromo"))
        .expect("selfpromo row");
    assert!(line.contains("manualSkip"));
}

#[test]
fn test_set_in_unknown_channel_fails() {
    let (path, _tmp) = config_file_in_tmp_dir();
    let err = run_cli(&path, &["set", "sponsor", "disable", "--channel", "ghost"]).unwrap_err();
    assert!(format!("{err:#}").contains("ghost"));
}

#[test]
fn test_inherit_at_global_scope_fails() {
    let (path, _tmp) = config_file_in_tmp_dir();
    assert!(run_cli(&path, &["set", "sponsor", "inherit"]).is_err());
}

#[test]
fn test_color_and_options() {
    let (path, _tmp) = config_file_in_tmp_dir();
    run_cli(&path, &["color", "intro", "#101010"]).expect("color");
    run_cli(&path, &["color", "intro", "#202020", "--preview"]).expect("preview");
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.bar_types["intro"].color, "#101010");
    assert_eq!(config.bar_types["preview-intro"].color, "#202020");

    let out = run_cli(&path, &["options", "exclusive_access"]).expect("options");
    assert!(out.contains("* showOverlay  Show Label"));
    assert!(!out.contains("autoSkip"));
}

#[test]
fn test_remove_channel() {
    let (path, _tmp) = config_file_in_tmp_dir();
    run_cli(&path, &["add-channel", "chanA"]).expect("add");
    run_cli(&path, &["remove-channel", "chanA"]).expect("remove");
    assert!(run_cli(&path, &["remove-channel", "chanA"]).is_err());
    let config = Config::load_from(&path).expect("load");
    assert!(config.channel_specific_settings.is_empty());
}

#[test]
fn test_learn_more_print() {
    let (path, _tmp) = config_file_in_tmp_dir();
    let out = run_cli(&path, &["learn-more", "filler", "--print"]).expect("learn-more");
    assert_eq!(out, "https://wiki.sponsor.ajay.app/w/Filler_Tangent\n");
}
