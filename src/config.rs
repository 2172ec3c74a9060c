//! Site configuration.
//!
//! Loads and validates `press.toml`. Configuration is sparse: stock
//! defaults cover everything except the content API endpoint, and user
//! files only name the values they override. Unknown keys are rejected to
//! catch typos early.
//!
//! ```toml
//! [api]
//! url = "https://your-repo.cdn.example.dev/api/v2"
//! access_token = "..."      # Optional; sent as a bearer token
//! content_type = "posts"    # Document type queried for the listing
//! page_size = 1             # Posts per listing page
//!
//! [listing]
//! prerender = 1             # Listing pages baked into the static output
//!
//! [site]
//! title = "simple-press"    # Shown in the header and <title>
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1a1a1a"
//! text_muted = "#666666"
//! link = "#ff57b2"
//!
//! [colors.dark]
//! background = "#1a1a1e"
//! text = "#f8f8f8"
//! text_muted = "#bbbbbb"
//! link = "#ff57b2"
//! ```
//!
//! There is deliberately no environment-variable surface: the API endpoint
//! and token travel through this file into the client factory, so every
//! dependency on them is explicit and injectable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `press.toml`.
///
/// Embedded in the fetch manifest so the generate stage renders with the
/// same settings the fetch ran with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content API connection settings.
    pub api: ApiConfig,
    /// Listing page behavior.
    pub listing: ListingConfig,
    /// Site identity.
    pub site: SiteMeta,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.url.is_empty() {
            return Err(ConfigError::Validation("api.url must be set".into()));
        }
        if self.api.page_size == 0 {
            return Err(ConfigError::Validation(
                "api.page_size must be at least 1".into(),
            ));
        }
        if self.listing.prerender == 0 {
            return Err(ConfigError::Validation(
                "listing.prerender must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Content API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the document API. Required.
    pub url: String,
    /// Access token, sent as a bearer token when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Document type queried for the listing.
    pub content_type: String,
    /// Posts per listing page. The in-browser load-more inherits this page
    /// size through the cursor.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            access_token: None,
            content_type: "posts".to_string(),
            page_size: 1,
        }
    }
}

/// Listing page behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Listing pages baked into the static output at build time. Pages
    /// beyond the first are pulled through the pagination cursor, exactly
    /// as the browser would.
    pub prerender: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { prerender: 1 }
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Shown in the header and `<title>`.
    pub title: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "simple-press".to_string(),
        }
    }
}

/// Color schemes for light and dark modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Dates, authors, reading time.
    pub text_muted: String,
    pub link: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#1a1a1e".to_string(),
            text: "#f8f8f8".to_string(),
            text_muted: "#bbbbbb".to_string(),
            link: "#ff57b2".to_string(),
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// CSS custom properties generated from the color config. Prepended to the
/// embedded stylesheet by the renderer.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let scheme = |s: &ColorScheme| {
        format!(
            "  --background: {};\n  --text: {};\n  --text-muted: {};\n  --link: {};",
            s.background, s.text, s.text_muted, s.link
        )
    };
    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: light) {{\n  :root {{\n{}\n  }}\n}}",
        scheme(&colors.dark),
        scheme(&colors.light)
            .lines()
            .map(|l| format!("  {l}"))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// A documented stock `press.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r##"# simple-press configuration.
# Sparse file: every key except api.url is optional and shown at its default.

[api]
# Base URL of your content API. Required.
url = "https://your-repo.cdn.example.dev/api/v2"
# Access token for private repositories. Sent as a bearer token.
# access_token = "..."
# Document type queried for the listing.
content_type = "{content_type}"
# Posts per listing page. The browser's load-more inherits this size.
page_size = {page_size}

[listing]
# Listing pages baked into the static output at build time.
prerender = {prerender}

[site]
# Shown in the header and page titles.
title = "{title}"

# Colors for dark (default) and light mode.
[colors.dark]
background = "{dark_bg}"
text = "{dark_text}"
text_muted = "{dark_muted}"
link = "{dark_link}"

[colors.light]
background = "#ffffff"
text = "#1a1a1a"
text_muted = "#666666"
link = "{dark_link}"
"##,
        content_type = defaults.api.content_type,
        page_size = defaults.api.page_size,
        prerender = defaults.listing.prerender,
        title = defaults.site.title,
        dark_bg = defaults.colors.dark.background,
        dark_text = defaults.colors.dark.text,
        dark_muted = defaults.colors.dark.text_muted,
        dark_link = defaults.colors.dark.link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_config_fills_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            [api]
            url = "https://api.example.dev"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.url, "https://api.example.dev");
        assert_eq!(config.api.content_type, "posts");
        assert_eq!(config.api.page_size, 1);
        assert_eq!(config.listing.prerender, 1);
        config.validate().unwrap();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [api]
            url = "https://api.example.dev"
            page_sise = 2
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_api_url_fails_validation() {
        let config = SiteConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_page_size_fails_validation() {
        let mut config = SiteConfig::default();
        config.api.url = "https://api.example.dev".to_string();
        config.api.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_prerender_fails_validation() {
        let mut config = SiteConfig::default();
        config.api.url = "https://api.example.dev".to_string();
        config.listing.prerender = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn stock_config_parses_and_validates() {
        let config: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn color_css_contains_both_schemes() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--background:"));
        assert!(css.contains("prefers-color-scheme: light"));
    }

    #[test]
    fn config_survives_json_round_trip() {
        // The manifest embeds the config as JSON between stages.
        let mut config = SiteConfig::default();
        config.api.url = "https://api.example.dev".to_string();
        config.api.access_token = Some("secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.api.url, config.api.url);
        assert_eq!(back.api.access_token, config.api.access_token);
    }
}
