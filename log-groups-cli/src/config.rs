//! Configuration file loading

use anyhow::{Context, Result};
use log_groups::GroupSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_groups: GroupSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print the default run banners around markers (false = markers and
    /// raw output lines only)
    #[serde(default = "default_true")]
    pub banners: bool,
    /// Banner width in columns
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banners: true,
            width: default_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_width() -> usize {
    80
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [log_groups]
            group_by_play = true
            enable_on_var = "GITLAB_CI"
            format_start = "section_start:"
            format_end = "section_end"

            [output]
            banners = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.log_groups.group_by_play, Some(true));
        assert_eq!(config.log_groups.enable_on_var.as_deref(), Some("GITLAB_CI"));
        assert!(!config.log_groups.disabled);
        assert!(!config.output.banners);
        assert_eq!(config.output.width, 80);
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.log_groups, GroupSettings::default());
        assert!(config.output.banners);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log_groups]\ndisabled = true").unwrap();

        let config = load_config(file.path()).unwrap();
        assert!(config.log_groups.disabled);
    }

    #[test]
    fn test_load_config_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log_groups]\ndisabled = \"sometimes\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
