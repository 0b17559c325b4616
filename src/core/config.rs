//! Application configuration management

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration load/save failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("config I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI settings
    pub ui: UiConfig,
    /// Preset colors for content lines
    pub palette: Vec<String>,
    /// Form defaults
    pub defaults: FormDefaults,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Form panel width
    pub form_panel_width: f32,
    /// Font with Hangul coverage; looked up in system locations when unset
    pub font_path: Option<PathBuf>,
}

/// Prefilled form values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    /// Version shown in the title form
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            palette: vec![
                "#3b82f6".to_string(),
                "#ef4444".to_string(),
                "#22c55e".to_string(),
                "#f59e0b".to_string(),
            ],
            defaults: FormDefaults::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            form_panel_width: 360.0,
            font_path: None,
        }
    }
}

impl UiConfig {
    pub fn is_dark(&self) -> bool {
        !self.theme.eq_ignore_ascii_case("light")
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("com", "patchnote", "Patchnote")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })?;
        Self::from_json(&content)
    }

    /// Parse configuration, filling missing fields with defaults
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Font file to load for Hangul text
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.ui.font_path {
            return vec![path.clone()];
        }

        [
            "C:\\Windows\\Fonts\\malgun.ttf",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "ui": { "theme": "light" } }"#).unwrap();
        assert!(!config.ui.is_dark());
        assert_eq!(config.ui.form_panel_width, 360.0);
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_configured_font_wins() {
        let mut config = AppConfig::default();
        config.ui.font_path = Some(PathBuf::from("/fonts/custom.ttf"));
        assert_eq!(config.font_candidates(), vec![PathBuf::from("/fonts/custom.ttf")]);
    }
}
