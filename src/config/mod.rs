use crate::core::calculator::timeline::ViewMode;
use crate::core::calculator::timezone;
use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `Config::default()`; used by `config --check`.
pub const KNOWN_KEYS: [&str; 4] = [
    "display_timezone",
    "accent_palette",
    "collapse_markers",
    "default_view",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_display_timezone")]
    pub display_timezone: String,
    #[serde(default = "default_accent_palette")]
    pub accent_palette: Vec<String>,
    #[serde(default = "default_collapse_markers")]
    pub collapse_markers: bool,
    #[serde(default = "default_view")]
    pub default_view: ViewMode,
}

fn default_display_timezone() -> String {
    "America/New_York".to_string()
}
fn default_accent_palette() -> Vec<String> {
    ["#4f8cff", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#ec4899"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_collapse_markers() -> bool {
    true
}
fn default_view() -> ViewMode {
    ViewMode::MultiDayRolling
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_timezone: default_display_timezone(),
            accent_palette: default_accent_palette(),
            collapse_markers: default_collapse_markers(),
            default_view: default_view(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rticketline")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rticketline.yaml")
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.display_tz()?;
        if self.default_view == ViewMode::SingleDay {
            return Err(AppError::Config(
                "default_view must be a multi-day view (rolling or combined)".into(),
            ));
        }
        Ok(())
    }

    pub fn display_tz(&self) -> AppResult<Tz> {
        timezone::parse_zone(&self.display_timezone)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the current values, creating the directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Keys missing from the YAML file at `path` (filled from defaults on load).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let Some(map) = value.as_mapping() else {
            return Ok(KNOWN_KEYS.to_vec());
        };

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}
