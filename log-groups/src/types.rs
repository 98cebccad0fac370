//! Core types for the log groups library
//!
//! Lifecycle events are the only input the tracker consumes. They carry the
//! grouping keys (play name, role name) plus the little extra a downstream
//! renderer needs to print the run the way the automation engine would.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result type for group tracking operations
pub type Result<T> = std::result::Result<T, GroupError>;

/// Errors that can occur while emitting groups
///
/// Writing a line is the only fallible operation; it is surfaced unchanged
/// and never retried.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Failed to write to sink: {0}")]
    Sink(#[from] std::io::Error),
}

/// An ordered notification of run progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A play begins
    PlayStart {
        /// Play name as declared in the playbook (may be empty)
        name: String,
    },

    /// A task begins
    TaskStart {
        /// Task name
        name: String,
        /// Owning role, `None` for play-level tasks
        role: Option<String>,
    },

    /// Final run summary; always the last event of a run
    RunStats {
        /// Per-host recap counters, keyed by host name
        hosts: BTreeMap<String, HostStats>,
    },
}

impl LifecycleEvent {
    pub fn play_start(name: impl Into<String>) -> Self {
        Self::PlayStart { name: name.into() }
    }

    /// An empty role is the same as no role
    pub fn task_start(name: impl Into<String>, role: Option<&str>) -> Self {
        Self::TaskStart {
            name: name.into(),
            role: role.filter(|r| !r.is_empty()).map(str::to_string),
        }
    }

    pub fn run_stats() -> Self {
        Self::RunStats {
            hosts: BTreeMap::new(),
        }
    }

    /// Role owning a task; empty when the task has no role or the event
    /// is not a task
    pub fn role_name(&self) -> &str {
        match self {
            Self::TaskStart {
                role: Some(role), ..
            } => role.as_str(),
            _ => "",
        }
    }
}

/// Recap counters for one host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStats {
    #[serde(default)]
    pub ok: u32,
    #[serde(default)]
    pub changed: u32,
    #[serde(default)]
    pub unreachable: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub rescued: u32,
    #[serde(default)]
    pub ignored: u32,
}
