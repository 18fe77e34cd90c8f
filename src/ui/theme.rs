use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub nav_active_bg: String,
    pub nav_active_fg: String,
    pub card_front: String,
    pub card_back: String,
    pub example: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        Self::load_from(Self::user_dir().as_deref(), name)
    }

    /// Looks in `user_dir` first; user themes shadow bundled ones. A user
    /// file that fails to parse falls through to the bundled theme.
    pub fn load_from(user_dir: Option<&Path>, name: &str) -> Option<Self> {
        if let Some(dir) = user_dir {
            let user_theme_path = dir.join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        Self::bundled(name)
    }

    pub fn user_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordflip").join("themes"))
    }

    pub fn bundled(name: &str) -> Option<Self> {
        let file = ThemeAssets::get(&format!("{name}.toml"))?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }

    /// Name of the bundled theme after `current`, wrapping around.
    pub fn next_name(current: &str) -> String {
        let themes = Self::available_themes();
        match themes.iter().position(|t| t == current) {
            Some(idx) => themes[(idx + 1) % themes.len()].clone(),
            None => themes
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::bundled(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            text_muted: "#7f849c".to_string(),
            accent: "#89b4fa".to_string(),
            accent_dim: "#45475a".to_string(),
            border: "#45475a".to_string(),
            border_focused: "#89b4fa".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            nav_active_bg: "#89b4fa".to_string(),
            nav_active_fg: "#1e1e2e".to_string(),
            card_front: "#f9e2af".to_string(),
            card_back: "#a6e3a1".to_string(),
            example: "#bac2de".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_muted(&self) -> Color { Self::parse_color(&self.text_muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn nav_active_bg(&self) -> Color { Self::parse_color(&self.nav_active_bg) }
    pub fn nav_active_fg(&self) -> Color { Self::parse_color(&self.nav_active_fg) }
    pub fn card_front(&self) -> Color { Self::parse_color(&self.card_front) }
    pub fn card_back(&self) -> Color { Self::parse_color(&self.card_back) }
    pub fn example(&self) -> Color { Self::parse_color(&self.example) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}
