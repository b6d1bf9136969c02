//! Panel configuration — TOML file with brand, timings, theme and routes.
//!
//! Every field is optional. Missing route groups fall back to the built-in
//! dashboard routes; missing timings fall back to 80ms / 200ms / 60ms.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reveal::{RevealTimings, DEFAULT_BOTTOM_REVEAL, DEFAULT_STAGGER, DEFAULT_TOP_REVEAL};
use crate::routes::{RouteEntry, RouteModel};
use crate::theme::ThemeMode;

pub const DEFAULT_BRAND: &str = "TensorFlow";

/// Reveal timings as written in the file, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub top_reveal_ms: u64,
    pub bottom_reveal_ms: u64,
    pub stagger_ms: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            top_reveal_ms: DEFAULT_TOP_REVEAL.as_millis() as u64,
            bottom_reveal_ms: DEFAULT_BOTTOM_REVEAL.as_millis() as u64,
            stagger_ms: DEFAULT_STAGGER.as_millis() as u64,
        }
    }
}

impl TimingsConfig {
    pub fn build(&self) -> Result<RevealTimings, ConfigError> {
        RevealTimings::new(
            Duration::from_millis(self.top_reveal_ms),
            Duration::from_millis(self.bottom_reveal_ms),
            Duration::from_millis(self.stagger_ms),
        )
    }
}

/// Raw, unvalidated configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub brand: String,
    pub initially_opened: bool,
    pub theme: ThemeMode,
    pub timings: TimingsConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<Vec<RouteEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<RouteEntry>>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            initially_opened: true,
            theme: ThemeMode::Light,
            timings: TimingsConfig::default(),
            primary: None,
            secondary: None,
        }
    }
}

impl PanelConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate and produce the settings a panel is mounted with.
    pub fn build(&self) -> Result<PanelSettings, ConfigError> {
        let defaults = RouteModel::default_routes();
        let primary = self
            .primary
            .clone()
            .unwrap_or_else(|| defaults.primary().to_vec());
        let secondary = self
            .secondary
            .clone()
            .unwrap_or_else(|| defaults.secondary().to_vec());

        Ok(PanelSettings {
            routes: RouteModel::new(primary, secondary)?,
            timings: self.timings.build()?,
            opened: self.initially_opened,
            theme: self.theme,
            brand: self.brand.clone(),
        })
    }
}

/// Validated settings for mounting a [`Sidebar`](crate::Sidebar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSettings {
    pub routes: RouteModel,
    pub timings: RevealTimings,
    pub opened: bool,
    pub theme: ThemeMode,
    pub brand: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            routes: RouteModel::default_routes(),
            timings: RevealTimings::default(),
            opened: true,
            theme: ThemeMode::Light,
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteGroup;

    #[test]
    fn empty_file_gives_defaults() {
        let config = PanelConfig::from_toml("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.build().unwrap(), PanelSettings::default());
    }

    #[test]
    fn parses_routes_and_timings() {
        let content = r#"
brand = "Ledger"
initially_opened = false
theme = "dark"

[timings]
top_reveal_ms = 50
bottom_reveal_ms = 150

[[primary]]
id = "home"
label = "Home"
icon = "house"
path = "/"

[[primary]]
id = "reports"
label = "Reports"
icon = "file"
path = "/reports"
"#;
        let settings = PanelConfig::from_toml(content).unwrap().build().unwrap();
        assert_eq!(settings.brand, "Ledger");
        assert!(!settings.opened);
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.routes.primary().len(), 2);
        assert_eq!(settings.routes.primary()[1].icon_key, "file");
        // Secondary group not given: built-in entries.
        assert_eq!(settings.routes.secondary().len(), 2);
        assert_eq!(
            settings.timings.group_delay(RouteGroup::Primary),
            Duration::from_millis(50)
        );
        assert_eq!(settings.timings.stagger(), DEFAULT_STAGGER);
    }

    #[test]
    fn invalid_routes_fail_at_build() {
        let content = r#"
[[secondary]]
id = "settings"
label = "Settings"
icon = "sliders"
path = ""
"#;
        let config = PanelConfig::from_toml(content).unwrap();
        assert!(matches!(config.build(), Err(ConfigError::EmptyPath { .. })));
    }

    #[test]
    fn inverted_timings_fail_at_build() {
        let content = "[timings]\ntop_reveal_ms = 300\nbottom_reveal_ms = 200\n";
        let config = PanelConfig::from_toml(content).unwrap();
        assert!(matches!(config.build(), Err(ConfigError::RevealOrder { .. })));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            PanelConfig::from_toml("brand = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = PanelConfig::default();
        config.primary = Some(vec![RouteEntry::new("home", "Home", "house", "/")]);
        config.theme = ThemeMode::Dark;
        let text = config.to_toml().unwrap();
        assert!(text.contains("icon = \"house\""));
        assert_eq!(PanelConfig::from_toml(&text).unwrap(), config);
    }
}
