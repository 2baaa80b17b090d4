//! Typed error variants for the skipprefs-config crate.
//!
//! Provides structured error types for config I/O, validation, and the
//! preference editors. Callers that use `anyhow` get these through the
//! blanket `From` impl for any `std::error::Error`.
//!
//! # Example
//!
//! ```rust,no_run
//! use skipprefs_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             other => eprintln!("{other}"),
//!         }
//!     }
//! }
//! ```

use crate::types::{Category, CategorySkipOption};
use thiserror::Error;

/// Errors that can occur when loading, saving, or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// The channel has no entry in `channel_specific_settings`.
    ///
    /// Channels must be materialized (see `Config::ensure_channel`) before
    /// their selections can be edited.
    #[error("no settings exist for channel '{0}'")]
    UnknownChannel(String),

    /// `Inherit` was chosen at the global scope, which has nothing to inherit from.
    #[error("'inherit' is only valid for channel-specific settings")]
    InheritAtGlobalScope,

    /// The option is not offered for this category.
    #[error("option '{}' is not available for category '{}'", .option.option_name(), .category)]
    UnsupportedOption {
        category: Category,
        option: CategorySkipOption,
    },

    /// The string does not name a known category.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// The string does not name a known skip choice.
    #[error("unknown skip option '{0}'")]
    UnknownOption(String),

    /// The color is not a `#rgb` or `#rrggbb` hex code.
    #[error("invalid color '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    /// Bar colors are shared by every channel and only edited globally.
    #[error("bar colors can only be changed in the global settings, not for channel '{0}'")]
    ColorOutsideGlobalScope(String),

    /// A preview color edit was requested for a category that has none.
    #[error("category '{0}' has no preview color")]
    NoPreviewColor(Category),
}
