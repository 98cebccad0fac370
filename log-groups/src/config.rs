//! Group configuration types
//!
//! This module defines the resolved, immutable configuration handed to the
//! tracker. How it is produced (environment, files, flags) lives in
//! [`crate::settings`]; the tracker only ever sees these plain fields.

/// Start token used by GitHub Actions workflow commands
pub const GITHUB_GROUP_START: &str = "::group::";

/// End token used by GitHub Actions workflow commands
pub const GITHUB_GROUP_END: &str = "::endgroup::";

/// Configuration for a single run of the group tracker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupConfig {
    /// Whether a supporting log viewer is present and grouping is not disabled
    pub grouping_enabled: bool,

    /// Group per play instead of per role
    pub group_by_play: bool,

    /// Marker syntax for the target log viewer
    pub markers: MarkerFormat,
}

impl GroupConfig {
    /// Create a new configuration with default settings (grouping off, role mode)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable marker emission
    pub fn with_grouping(mut self, enabled: bool) -> Self {
        self.grouping_enabled = enabled;
        self
    }

    /// Builder method: select per-play granularity
    pub fn with_group_by_play(mut self, by_play: bool) -> Self {
        self.group_by_play = by_play;
        self
    }

    /// Builder method: set the marker syntax
    pub fn with_markers(mut self, markers: MarkerFormat) -> Self {
        self.markers = markers;
        self
    }
}

/// Start/end marker syntax
///
/// A start marker is a single line made of the `start` token followed by the
/// group label; an end marker is the bare `end` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFormat {
    pub start: String,
    pub end: String,
}

impl MarkerFormat {
    /// `::group::<label>` / `::endgroup::`
    pub fn github_actions() -> Self {
        Self::custom(GITHUB_GROUP_START, GITHUB_GROUP_END)
    }

    pub fn custom(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Render the start marker line for a group label
    pub fn start_line(&self, label: &str) -> String {
        format!("{}{}", self.start, label)
    }

    /// Render the end marker line
    pub fn end_line(&self) -> &str {
        &self.end
    }
}

impl Default for MarkerFormat {
    fn default() -> Self {
        Self::github_actions()
    }
}
