//! Appearance Settings Model

use serde::{Deserialize, Serialize};

fn default_welcome_background() -> String {
    "#f0f0f0".to_string()
}

fn default_white() -> String {
    "#ffffff".to_string()
}

fn default_black() -> String {
    "#000000".to_string()
}

fn default_navbar() -> String {
    "#333333".to_string()
}

fn default_border() -> String {
    "#cccccc".to_string()
}

fn default_opacity() -> f64 {
    1.0
}

/// Site theming, stored as a single flat document
///
/// Serde defaults fill every absent field on read, so callers never see
/// partial records. Image fields hold blob-store paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    #[serde(default)]
    pub welcome_text: String,
    #[serde(default = "default_welcome_background")]
    pub welcome_background: String,
    #[serde(default = "default_white")]
    pub background_color: String,
    #[serde(default = "default_black")]
    pub text_color: String,
    #[serde(default = "default_navbar")]
    pub navbar_color: String,
    #[serde(default = "default_white")]
    pub navbar_text_color: String,
    #[serde(default = "default_opacity")]
    pub navbar_opacity: f64,
    #[serde(default = "default_black")]
    pub card_text_color: String,
    #[serde(default = "default_border")]
    pub card_border_color: String,
    #[serde(default = "default_white")]
    pub card_background_color: String,
    #[serde(default = "default_opacity")]
    pub card_background_opacity: f64,
    /// Stored with historical casing; do not normalize
    #[serde(rename = "BackgroundOpacity", default = "default_opacity")]
    pub background_opacity: f64,
    #[serde(default)]
    pub card_blur: f64,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub welcome_image: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub placeholder_image: Option<String>,
    #[serde(default)]
    pub ui_logo: Option<String>,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            welcome_text: String::new(),
            welcome_background: default_welcome_background(),
            background_color: default_white(),
            text_color: default_black(),
            navbar_color: default_navbar(),
            navbar_text_color: default_white(),
            navbar_opacity: default_opacity(),
            card_text_color: default_black(),
            card_border_color: default_border(),
            card_background_color: default_white(),
            card_background_opacity: default_opacity(),
            background_opacity: default_opacity(),
            card_blur: 0.0,
            company_logo: None,
            welcome_image: None,
            background_image: None,
            placeholder_image: None,
            ui_logo: None,
        }
    }
}
