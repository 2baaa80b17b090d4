//! Command-line interface for skipprefs.
//!
//! Every subcommand loads the config file, works through the same editors the
//! settings view uses, and lets the store persist each commit.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skipprefs_config::{
    Category, Config, ConfigError, ConfigStore, ConfigWatcher, FieldUpdate, LogLevel, Scope,
    SkipChoice, SyncedConfig, wiki_link,
};
use skipprefs_settings_ui::{CategorySkipOptions, CategorySkipOptionsProps, EnglishLocalizer};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::report;

/// skipprefs - Per-category skip preferences with channel overrides
#[derive(Parser, Debug)]
#[command(name = "skipprefs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use (default: ~/.config/skipprefs/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the skip option of every category
    Show {
        /// Show a channel's overrides instead of the global settings
        #[arg(long, value_name = "CHANNEL")]
        channel: Option<String>,
    },

    /// List the options a category can be set to
    Options {
        category: Category,

        #[arg(long, value_name = "CHANNEL")]
        channel: Option<String>,
    },

    /// Choose the skip option for a category
    Set {
        category: Category,

        /// inherit, disable, showOverlay, manualSkip or autoSkip
        choice: SkipChoice,

        /// Override only this channel (must exist, see add-channel)
        #[arg(long, value_name = "CHANNEL")]
        channel: Option<String>,
    },

    /// Change a category's bar color
    Color {
        category: Category,

        /// Hex color such as #00d400
        value: String,

        /// Change the preview bar color instead
        #[arg(long)]
        preview: bool,
    },

    /// Start overriding options for a channel
    AddChannel { channel: String },

    /// Drop all overrides for a channel
    RemoveChannel { channel: String },

    /// Open the wiki page describing a category
    LearnMore {
        category: Category,

        /// Print the link instead of opening it
        #[arg(long)]
        print: bool,
    },

    /// Print the option table again every time the config file changes
    Watch {
        #[arg(long, value_name = "CHANNEL")]
        channel: Option<String>,
    },
}

/// Parse arguments, run the subcommand and return the process exit code
pub fn process_cli() -> i32 {
    let cli = Cli::parse();
    crate::debug::init_log_bridge(cli.log_level.map(LogLevel::to_level_filter));

    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("skipprefs: error: {e:#}");
            1
        }
    }
}

/// Run a parsed command, writing its output to `out`
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut store = SyncedConfig::open(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    crate::debug::apply_config_level(store.config().log_level);
    log::info!("Using config {}", path.display());

    match cli.command {
        Commands::Show { channel } => {
            let scope = Scope::from_channel(channel.as_deref());
            report::write_table(out, store.config(), &scope, &EnglishLocalizer)?;
        }
        Commands::Options { category, channel } => {
            let scope = Scope::from_channel(channel.as_deref());
            report::write_choices(out, store.config(), category, &scope, &EnglishLocalizer)?;
        }
        Commands::Set {
            category,
            choice,
            channel,
        } => {
            let mut props = CategorySkipOptionsProps::new(category);
            props.selected_channel = channel;
            let row = CategorySkipOptions::new(props, store.config());
            row.on_option_change(&mut store, choice.option_name())?;
            writeln!(
                out,
                "{category} ({}): {}",
                row.scope(),
                row.selected(store.config())
            )?;
        }
        Commands::Color {
            category,
            value,
            preview,
        } => {
            let mut row =
                CategorySkipOptions::new(CategorySkipOptionsProps::new(category), store.config());
            row.on_color_change(&mut store, &value, preview)?;
            let kind = if preview { "preview bar" } else { "bar" };
            writeln!(out, "{category} {kind} color: {value}")?;
        }
        Commands::AddChannel { channel } => {
            add_channel(&mut store, &channel)?;
            writeln!(out, "channel '{channel}' added")?;
        }
        Commands::RemoveChannel { channel } => {
            remove_channel(&mut store, &channel)?;
            writeln!(out, "channel '{channel}' removed")?;
        }
        Commands::LearnMore { category, print } => {
            let url = wiki_link(category);
            if print {
                writeln!(out, "{url}")?;
            } else {
                open::that(url).with_context(|| format!("Failed to open {url}"))?;
                writeln!(out, "Opened {url}")?;
            }
        }
        Commands::Watch { channel } => watch(&mut store, channel.as_deref(), out)?,
    }
    Ok(())
}

/// Create an empty override list for `channel`; a no-op when it exists
pub fn add_channel<S: ConfigStore + ?Sized>(store: &mut S, channel: &str) -> Result<()> {
    let mut config = store.config().clone();
    if !config.ensure_channel(channel) {
        log::info!("Channel '{channel}' already present");
        return Ok(());
    }
    store.set(FieldUpdate::ChannelSpecificSettings(
        config.channel_specific_settings,
    ))?;
    Ok(())
}

/// Remove `channel` and every override it holds
pub fn remove_channel<S: ConfigStore + ?Sized>(store: &mut S, channel: &str) -> Result<()> {
    let mut channels = store.config().channel_specific_settings.clone();
    if channels.remove(channel).is_none() {
        return Err(ConfigError::UnknownChannel(channel.to_string()).into());
    }
    store.set(FieldUpdate::ChannelSpecificSettings(channels))?;
    Ok(())
}

fn watch(store: &mut SyncedConfig, channel: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let path = store
        .path()
        .context("Watching requires a config file")?
        .to_path_buf();
    let watcher = ConfigWatcher::new(&path, 200)?;
    let scope = Scope::from_channel(channel);

    report::write_table(out, store.config(), &scope, &EnglishLocalizer)?;
    out.flush()?;
    loop {
        if watcher.recv_timeout(Duration::from_secs(1))?.is_none() {
            continue;
        }
        match store.reload() {
            Ok(()) => {
                writeln!(out)?;
                report::write_table(out, store.config(), &scope, &EnglishLocalizer)?;
            }
            // A half-written file; the next event brings the rest
            Err(e) => log::warn!("Ignoring unreadable config: {e}"),
        }
        out.flush()?;
    }
}
