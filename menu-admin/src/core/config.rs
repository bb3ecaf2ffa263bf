//! Admin dashboard configuration

use shared::models::Language;

/// Dashboard configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | ADMIN_LANGUAGE | ru | Active UI language (ru, ro, en) |
/// | PAGE_SIZE_DESKTOP | 10 | Items per page on desktop viewports |
/// | PAGE_SIZE_NARROW | 5 | Items per page on narrow viewports |
/// | ENVIRONMENT | development | Runtime environment |
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Active UI language, used for localized filtering and sorting
    pub language: Language,
    /// Items per page on desktop viewports
    pub desktop_page_size: usize,
    /// Items per page on narrow viewports
    pub narrow_page_size: usize,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            language: std::env::var("ADMIN_LANGUAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            desktop_page_size: std::env::var("PAGE_SIZE_DESKTOP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            narrow_page_size: std::env::var("PAGE_SIZE_NARROW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Page size for the given viewport
    pub fn page_size(&self, narrow_viewport: bool) -> usize {
        if narrow_viewport {
            self.narrow_page_size
        } else {
            self.desktop_page_size
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::from_env();
        assert_eq!(config.page_size(false), config.desktop_page_size);
        assert_eq!(config.page_size(true), config.narrow_page_size);
        assert!(config.desktop_page_size >= config.narrow_page_size);
    }
}
