use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::navigation::Section;
use crate::vocab::intake::DEFAULT_PLACEHOLDER_IMAGE;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_start_section")]
    pub start_section: String,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_start_section() -> String {
    Section::Home.as_tag().to_string()
}
fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            start_section: default_start_section(),
            placeholder_image: default_placeholder_image(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordflip")
            .join("config.toml")
    }

    pub fn start_section(&self) -> Section {
        self.start_section.parse().unwrap_or_default()
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// Reset values a hand-edited file may have broken.
    pub fn normalize(&mut self) {
        if self.start_section.parse::<Section>().is_err() {
            self.start_section = default_start_section();
        }
        if self.placeholder_image.is_empty() {
            self.placeholder_image = default_placeholder_image();
        }
    }
}
