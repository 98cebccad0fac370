//! Log Groups Library
//!
//! Brackets the output of an automation run in collapsible log groups so a CI
//! log viewer (GitHub Actions, TeamCity, ...) can fold each role or play.
//!
//! # Architecture
//!
//! The library is a small, synchronous state machine plus the capabilities it
//! is wired to:
//! - [`GroupTracker`] consumes ordered lifecycle events and emits group markers
//! - [`LineSink`] is where marker lines (and rendered output) are written
//! - [`Renderer`] is the downstream human-readable output, composed with the
//!   tracker by [`GroupedRenderer`]
//! - [`GroupSettings::resolve`] turns user settings plus an environment lookup
//!   into the immutable [`GroupConfig`] handed to the tracker
//!
//! The library does NOT:
//! - Read process environment or files on its own
//! - Parse or rewrite the log lines it brackets
//!
//! # Example Usage
//!
//! ```
//! use log_groups::{GroupConfig, GroupTracker, MemorySink};
//!
//! let config = GroupConfig::new().with_grouping(true);
//! let mut tracker = GroupTracker::new(config, MemorySink::new());
//!
//! tracker.on_task_start("web").unwrap();
//! tracker.on_task_start("web").unwrap();
//! tracker.on_task_start("db").unwrap();
//! tracker.on_run_stats().unwrap();
//!
//! assert_eq!(
//!     tracker.into_sink().into_lines(),
//!     vec!["::group::ROLE [web]", "::endgroup::", "::group::ROLE [db]", "::endgroup::"]
//! );
//! ```

// Public modules
pub mod config;
pub mod render;
pub mod settings;
pub mod sink;
pub mod tracker;
pub mod types;

// Re-export main types for convenience
pub use config::{GroupConfig, MarkerFormat};
pub use render::{GroupedRenderer, NullRenderer, Renderer};
pub use settings::{GroupSettings, SettingsError};
pub use sink::{LineSink, MemorySink, WriteSink};
pub use tracker::GroupTracker;
pub use types::{GroupError, HostStats, LifecycleEvent, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
