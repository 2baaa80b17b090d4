//! Skip preference configuration.
//!
//! # Sub-modules
//!
//! - [`config_struct`] - Core `Config` struct, `ChannelSettings`, and the `Default` impl
//! - [`persistence`] - `impl Config` methods for load/save and path resolution
//! - [`validation`] - duplicate-entry and color checks

pub mod config_struct;
pub mod persistence;
pub mod validation;

pub use config_struct::{ChannelSettings, Config};
pub use validation::is_hex_color;
