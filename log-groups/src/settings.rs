//! Configuration resolution
//!
//! Turns user settings (typically a `[log_groups]` table in a config file)
//! and the environment into a [`GroupConfig`]. The environment is passed in as
//! a lookup function, so resolution happens once, up front, and nothing
//! downstream reads process state.
//!
//! Rules:
//! - grouping activates when any of [`ACTIVATION_VARS`] or the configured
//!   `enable_on_var` is set
//! - `disabled = true` or a truthy [`DISABLED_VAR`] turns it back off
//! - [`GROUP_PER_PLAY_VAR`] overrides `group_by_play`
//! - `format_start` / `format_end` replace the GitHub Actions tokens

use crate::config::{GroupConfig, MarkerFormat};
use serde::{Deserialize, Serialize};

/// Variables whose presence indicates a log viewer that understands groups
pub const ACTIVATION_VARS: [&str; 2] = ["GITHUB_ACTIONS", "TEAMCITY_VERSION"];

/// Forces grouping off when truthy
pub const DISABLED_VAR: &str = "ANSIBLE_CALLBACK_LOG_GROUPS_DISABLED";

/// Selects play granularity when truthy
pub const GROUP_PER_PLAY_VAR: &str = "ANSIBLE_CALLBACK_LOG_GROUP_PER_PLAY";

/// Errors raised while resolving settings
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid boolean for {var}: {value:?}")]
    InvalidBool { var: String, value: String },
}

/// Unresolved, user-facing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Wrap plays in groups instead of roles
    #[serde(default)]
    pub group_by_play: Option<bool>,

    /// Extra environment variable that enables grouping when present
    #[serde(default)]
    pub enable_on_var: Option<String>,

    /// Disable grouping regardless of the environment
    #[serde(default)]
    pub disabled: bool,

    /// Start marker token (default `::group::`)
    #[serde(default)]
    pub format_start: Option<String>,

    /// End marker token (default `::endgroup::`)
    #[serde(default)]
    pub format_end: Option<String>,
}

impl GroupSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an environment lookup
    ///
    /// # Example
    /// ```
    /// use log_groups::GroupSettings;
    ///
    /// let config = GroupSettings::new()
    ///     .resolve(|var| (var == "GITHUB_ACTIONS").then(|| "true".to_string()))
    ///     .unwrap();
    /// assert!(config.grouping_enabled);
    /// assert!(!config.group_by_play);
    /// ```
    pub fn resolve<F>(&self, env: F) -> Result<GroupConfig, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let activated = ACTIVATION_VARS
            .iter()
            .copied()
            .chain(self.enable_on_var.as_deref())
            .find(|&var| env(var).is_some());

        let disabled = self.disabled || env_flag(&env, DISABLED_VAR)?.unwrap_or(false);

        let group_by_play = match env_flag(&env, GROUP_PER_PLAY_VAR)? {
            Some(flag) => flag,
            None => self.group_by_play.unwrap_or(false),
        };

        let defaults = MarkerFormat::github_actions();
        let markers = MarkerFormat::custom(
            self.format_start.clone().unwrap_or(defaults.start),
            self.format_end.clone().unwrap_or(defaults.end),
        );

        match (activated, disabled) {
            (_, true) => log::info!("Log grouping disabled"),
            (Some(var), false) => log::info!("Log grouping enabled by {}", var),
            (None, false) => log::info!("No supported log viewer detected, grouping off"),
        }

        Ok(GroupConfig {
            grouping_enabled: activated.is_some() && !disabled,
            group_by_play,
            markers,
        })
    }
}

/// Read an optional boolean environment variable
fn env_flag<F>(env: &F, var: &str) -> Result<Option<bool>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    match env(var) {
        Some(value) => parse_bool(&value).map(Some).ok_or_else(|| SettingsError::InvalidBool {
            var: var.to_string(),
            value,
        }),
        None => Ok(None),
    }
}

/// Parse the boolean spellings accepted by the automation engine's config
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "y" | "t" => Some(true),
        "0" | "false" | "no" | "off" | "n" | "f" | "" => Some(false),
        _ => None,
    }
}
