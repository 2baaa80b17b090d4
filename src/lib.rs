// Library exports for testing and potential library use
//
// # Mutex Usage Policy
//
// skipprefs is single-threaded apart from the config watcher backend thread.
//
//   - `parking_lot::Mutex`    - use for sync state shared with the watcher
//                               thread or the log bridge (debounce state, the
//                               debug log file).
//
//   - `std::sync::mpsc`       - change notifications and reload events are
//                               handed across threads over channels, never by
//                               sharing the `Config` itself.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod report;

// Re-export configuration types for integration tests
pub use skipprefs_config as config;
