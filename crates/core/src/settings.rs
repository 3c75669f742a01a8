//! Settings schema and loader
//!
//! Settings live in a small TOML file. Every key is optional:
//!
//! ```toml
//! [draw]
//! allow_repeats = false
//! tick_interval_ms = 50
//!
//! [grouping]
//! default_size = 3
//! label = "Group {n}"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grouping::DEFAULT_GROUP_LABEL;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub draw: DrawSettings,
    pub grouping: GroupingSettings,
}

/// Draw section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Whether a participant may win more than once
    pub allow_repeats: bool,
    /// Display ticker interval while a draw runs
    pub tick_interval_ms: u64,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            allow_repeats: false,
            tick_interval_ms: 50,
        }
    }
}

impl DrawSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Grouping section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingSettings {
    pub default_size: i64,
    /// Label template, `{n}` is replaced by the group ordinal
    pub label: String,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            default_size: 3,
            label: DEFAULT_GROUP_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.draw.tick_interval_ms == 0 {
            return Err(Error::Config(
                "draw.tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.grouping.default_size < 1 {
            return Err(Error::Config(
                "grouping.default_size must be at least 1".to_string(),
            ));
        }
        if !self.grouping.label.contains("{n}") {
            return Err(Error::Config(
                "grouping.label must contain the {n} placeholder".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.draw.allow_repeats);
        assert_eq!(settings.draw.tick_interval(), Duration::from_millis(50));
        assert_eq!(settings.grouping.default_size, 3);
        assert_eq!(settings.grouping.label, "Group {n}");
        settings.validate().unwrap();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings = Settings::from_toml("[draw]\nallow_repeats = true\n").unwrap();
        assert!(settings.draw.allow_repeats);
        assert_eq!(settings.draw.tick_interval_ms, 50);
        assert_eq!(settings.grouping, GroupingSettings::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Settings::from_toml("[draw]\ntick_interval_ms = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_toml("[grouping]\ndefault_size = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Settings::from_toml("[grouping]\nlabel = \"Team\"\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Settings::from_toml("[draw\n"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rollcall.toml");
        fs::write(
            &path,
            r#"
[draw]
tick_interval_ms = 80

[grouping]
default_size = 4
label = "Team {n}"
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.draw.tick_interval_ms, 80);
        assert_eq!(settings.grouping.default_size, 4);
        assert_eq!(settings.grouping.label, "Team {n}");
    }
}
