//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's `config.toml` in the content directory. The file
//! is sparse: only the keys that differ from the defaults need to be present.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Growth with Hardik | Digital Marketing"
//! lang = "en"
//! description = "Instagram growth, content strategy and AI automation."
//! # copyright_year = 2026  # Omit to use the build year
//!
//! [nav]
//! scroll_threshold = 50     # px scrolled before the nav turns opaque
//!
//! [reveal]
//! enabled = true            # Animate sections the first time they scroll into view
//! stagger_ms = 100          # Delay between items of the same list
//!
//! [form]
//! endpoint = "https://formspree.io/f/xnjqwnkb"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f9fafb"
//! text = "#000000"
//! text_muted = "#6b7280"
//! border = "#f3f4f6"
//! accent = "#000000"
//! accent_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("Default config does not serialize: {0}")]
    Defaults(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings (title, language, footer year).
    pub site: SiteMeta,
    /// Navigation shell behavior.
    pub nav: NavConfig,
    /// Reveal-on-scroll animation settings.
    pub reveal: RevealConfig,
    /// Contact form relay.
    pub form: FormConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = url::Url::parse(&self.form.endpoint).map_err(|e| {
            ConfigError::Validation(format!("form.endpoint is not a valid URL: {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "form.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.reveal.stagger_ms > 2000 {
            return Err(ConfigError::Validation(
                "reveal.stagger_ms must be at most 2000".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        Ok(())
    }

    /// Year printed in the footer: configured, or the current local year.
    pub fn copyright_year(&self) -> i32 {
        use chrono::Datelike;
        self.site
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Document-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Contents of `<title>`.
    pub title: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// `<meta name="description">`.
    pub description: String,
    /// Year shown in the footer. `None` means the build year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Growth with Hardik | Digital Marketing".to_string(),
            lang: "en".to_string(),
            description: "Instagram growth, content strategy and AI automation.".to_string(),
            copyright_year: None,
        }
    }
}

/// Navigation shell settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Vertical scroll offset (px) past which the nav switches to its
    /// opaque style. The comparison is strict: exactly this offset is still
    /// "not scrolled".
    pub scroll_threshold: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50,
        }
    }
}

/// Reveal-on-scroll settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// When false, every block renders already revealed and no observer runs.
    pub enabled: bool,
    /// Delay added per item within a list (services, pricing, process).
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: 100,
        }
    }
}

/// Contact form relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Absolute URL the browser POSTs the form to.
    pub endpoint: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/xnjqwnkb".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and input background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (eyebrows, descriptions, labels).
    pub text_muted: String,
    /// Hairline borders.
    pub border: String,
    /// Buttons, badges, the results band.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#000000".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#f3f4f6".to_string(),
            accent: "#000000".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            surface: "#141414".to_string(),
            text: "#f5f5f5".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#262626".to_string(),
            accent: "#ffffff".to_string(),
            accent_text: "#000000".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Layer `overlay` onto `base` in place. Tables merge key by key at every
/// depth; any other overlay value replaces what was there.
pub fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_toml(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Load `config.toml` from `root` on top of [`SiteConfig::default`], reject
/// unknown keys, and validate. No file means the defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let mut merged = toml::Value::try_from(SiteConfig::default())?;
    let path = root.join("config.toml");
    if path.is_file() {
        let overlay: toml::Value = toml::from_str(&fs::read_to_string(&path)?)?;
        merge_toml(&mut merged, overlay);
    }
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Growth Page Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Page content (brand, services, pricing, process) lives in content.toml;
# run 'growth-page gen-content' for a starting point.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
title = "Growth with Hardik | Digital Marketing"
lang = "en"
description = "Instagram growth, content strategy and AI automation."
# Year printed in the footer. Omit to use the year of the build.
# copyright_year = 2026

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[nav]
# Pixels scrolled before the header switches from transparent to opaque.
scroll_threshold = 50

# ---------------------------------------------------------------------------
# Reveal-on-scroll
# ---------------------------------------------------------------------------
[reveal]
# Each section animates in once, the first time it enters the viewport.
enabled = true
# Delay between consecutive cards of the same list, in milliseconds.
stagger_ms = 100

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[form]
# The browser POSTs name, email, handle and message here (URL-encoded).
endpoint = "https://formspree.io/f/xnjqwnkb"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f9fafb"
text = "#000000"
text_muted = "#6b7280"
border = "#f3f4f6"
accent = "#000000"
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
surface = "#141414"
text = "#f5f5f5"
text_muted = "#9ca3af"
border = "#262626"
accent = "#ffffff"
accent_text = "#000000"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_vars(&colors.light, "    "),
        dark = color_vars(&colors.dark, "        "),
    )
}

fn color_vars(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-accent-text", &scheme.accent_text),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties for the reveal animation.
pub fn generate_reveal_css(reveal: &RevealConfig) -> String {
    format!(
        ":root {{\n    --reveal-stagger: {}ms;\n}}",
        reveal.stagger_ms
    )
}
