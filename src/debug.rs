use parking_lot::Mutex;
/// Debug logging for skipprefs
///
/// Routes every `log::info!()` / `log::debug!()` etc. from skipprefs and its
/// crates into a debug log file, so stdout stays clean for command output.
///
/// The level is taken from, in order:
/// - the `--log-level` CLI flag
/// - `RUST_LOG` (also mirrors each line to stderr)
/// - `DEBUG_LEVEL` (0 = off, 1 = errors, 2 = info, 3 = debug, 4 = trace)
/// - `log_level` in config.yaml (see [`apply_config_level`])
///
/// Output goes to `skipprefs_debug.log` in the system temp directory.
use skipprefs_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a `DEBUG_LEVEL` value; anything unrecognised is `Off`
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Most verbose level named in a `RUST_LOG` value.
///
/// Accepts a bare level (`debug`) or `target=level` directives
/// (`skipprefs_config=trace,warn`).
pub fn parse_rust_log(value: &str) -> Option<log::LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<log::LevelFilter>().ok()
        })
        .max()
}

/// Pick the level from the CLI flag and environment, highest precedence first.
///
/// Returns `None` when none of them is set, leaving the choice to the config.
pub fn resolve_level(
    cli_level: Option<log::LevelFilter>,
    rust_log: Option<&str>,
    debug_level: Option<&str>,
) -> Option<log::LevelFilter> {
    cli_level
        .or_else(|| rust_log.and_then(parse_rust_log))
        .or_else(|| debug_level.map(|v| DebugLevel::parse(v).to_level_filter()))
}

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("skipprefs_debug.log")
}

struct DebugLogger {
    file: Option<File>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn open_file(&mut self, level: log::LevelFilter) {
        if self.file.is_some() || level == log::LevelFilter::Off {
            return;
        }
        let path = log_path();
        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
        {
            Ok(f) => {
                self.file = Some(f);
                self.write_raw(&format!(
                    "\n{}\nskipprefs debug session started at {} (level={})\n{}\n",
                    "=".repeat(80),
                    get_timestamp(),
                    level,
                    "=".repeat(80)
                ));
            }
            Err(e) => {
                // Logging must never fail a command
                if self.mirror_stderr {
                    eprintln!("skipprefs: cannot open {}: {}", path.display(), e);
                }
            }
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

/// Set when the CLI flag or environment chose the level
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| {
        Mutex::new(DebugLogger {
            file: None,
            mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
        })
    })
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let mut logger = get_logger().lock();
        logger.write_raw(&line);
        if logger.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(ref mut file) = get_logger().lock().file {
            let _ = file.flush();
        }
    }
}

static BRIDGE: LogBridge = LogBridge;

/// Install the `log` bridge.
///
/// Call once at startup. `cli_level` is the `--log-level` flag. Until
/// [`apply_config_level`] runs, logging stays off unless the flag or the
/// environment picked a level.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let debug_level = std::env::var("DEBUG_LEVEL").ok();
    let level = resolve_level(cli_level, rust_log.as_deref(), debug_level.as_deref());

    if log::set_logger(&BRIDGE).is_err() {
        // Already installed (tests)
        return;
    }
    match level {
        Some(level) => {
            LEVEL_PINNED.store(true, Ordering::Relaxed);
            get_logger().lock().open_file(level);
            log::set_max_level(level);
        }
        None => log::set_max_level(log::LevelFilter::Off),
    }
}

/// Apply the config file's `log_level` unless the CLI or environment set one
pub fn apply_config_level(level: LogLevel) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        return;
    }
    let filter = level.to_level_filter();
    get_logger().lock().open_file(filter);
    log::set_max_level(filter);
}
