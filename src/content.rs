//! Content loading and manifest generation.
//!
//! Stage 1 of the build. Reads the content directory and produces a
//! [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml      # Site configuration (optional)
//! ├── content.toml     # Brand, services, pricing, process (optional)
//! └── assets/          # Copied verbatim to the output root (optional)
//! ```
//!
//! When `content.toml` is absent the stock content embedded in the binary is
//! used, so an empty content directory still builds a complete page.
//!
//! ## Versioned Tables
//!
//! `content.toml` starts with `version = 1`. The version is checked before
//! the tables are deserialized, so a file written for a newer layout fails
//! with a clear message instead of a pile of unknown-field errors.
//!
//! ## Validation
//!
//! Errors (the build stops):
//! - Unsupported `version`
//! - Duplicate `id` in `services` or `pricing`, duplicate `number` in `process`
//!
//! Warnings (reported, the build continues):
//! - More than one highlighted pricing plan
//! - A process ordinal that does not match its position (`"03"` in slot 2)
//! - A pricing plan with no features

use crate::config::{self, SiteConfig};
use crate::types::{
    About, BrandInfo, Hero, PricingPlan, ProcessStep, Service, Stat, Testimonial,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Layout version of `content.toml` understood by this build.
pub const CONTENT_VERSION: i64 = 1;

/// File name of the content table inside the content directory.
pub const CONTENT_FILENAME: &str = "content.toml";

const STOCK_CONTENT: &str = include_str!("../static/content.toml");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unsupported content version {0} (this build reads version 1)")]
    UnsupportedVersion(i64),
    #[error("Duplicate key '{key}' in [[{table}]]")]
    DuplicateKey { table: &'static str, key: String },
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// All page content, as written in `content.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Content {
    pub version: i64,
    pub brand: BrandInfo,
    #[serde(default)]
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
}

impl Content {
    /// Reject duplicate rendering keys within each table.
    fn check_keys(&self) -> Result<(), ContentError> {
        ensure_unique("services", self.services.iter().map(|s| s.id.as_str()))?;
        ensure_unique("pricing", self.pricing.iter().map(|p| p.id.as_str()))?;
        ensure_unique("process", self.process.iter().map(|s| s.number.as_str()))?;
        Ok(())
    }

    /// Soft problems that still render, but probably not the way the author meant.
    pub fn warnings(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();

        let highlighted: Vec<String> = self
            .pricing
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.id.clone())
            .collect();
        if highlighted.len() > 1 {
            warnings.push(ContentWarning::MultipleHighlighted { ids: highlighted });
        }

        for plan in self.pricing.iter().filter(|p| p.features.is_empty()) {
            warnings.push(ContentWarning::EmptyFeatures {
                id: plan.id.clone(),
            });
        }

        for (idx, step) in self.process.iter().enumerate() {
            let position = idx + 1;
            if step.number.trim().parse::<usize>().ok() != Some(position) {
                warnings.push(ContentWarning::OrdinalMismatch {
                    position,
                    number: step.number.clone(),
                });
            }
        }

        warnings
    }
}

fn ensure_unique<'a>(
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

/// A content problem that does not stop the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentWarning {
    MultipleHighlighted { ids: Vec<String> },
    EmptyFeatures { id: String },
    OrdinalMismatch { position: usize, number: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentWarning::MultipleHighlighted { ids } => write!(
                f,
                "{} pricing plans are highlighted ({}); only one reads as recommended",
                ids.len(),
                ids.join(", ")
            ),
            ContentWarning::EmptyFeatures { id } => {
                write!(f, "pricing plan '{id}' has no features")
            }
            ContentWarning::OrdinalMismatch { position, number } => write!(
                f,
                "process step '{number}' is at position {position}"
            ),
        }
    }
}

/// Where the content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// `content.toml` in the content directory.
    File,
    /// The table embedded in the binary.
    Stock,
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub content: Content,
    pub source: ContentSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ContentWarning>,
    pub config: SiteConfig,
}

/// Parse and validate a content table.
pub fn parse_content(text: &str) -> Result<Content, ContentError> {
    let raw: toml::Value = toml::from_str(text)?;
    let version = raw.get("version").and_then(|v| v.as_integer()).unwrap_or(0);
    if version != CONTENT_VERSION {
        return Err(ContentError::UnsupportedVersion(version));
    }
    let content: Content = raw.try_into()?;
    content.check_keys()?;
    Ok(content)
}

/// The stock content table, commented, as shipped in the binary.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    STOCK_CONTENT
}

/// Load `content.toml` from `root`, falling back to the stock table.
pub fn load_content(root: &Path) -> Result<(Content, ContentSource), ContentError> {
    let path = root.join(CONTENT_FILENAME);
    if path.is_file() {
        let text = fs::read_to_string(&path)?;
        Ok((parse_content(&text)?, ContentSource::File))
    } else {
        Ok((parse_content(STOCK_CONTENT)?, ContentSource::Stock))
    }
}

/// Scan a content directory into a manifest.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let (content, source) = load_content(root)?;
    let warnings = content.warnings();

    Ok(Manifest {
        content,
        source,
        warnings,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn content_with(extra: &str) -> String {
        format!(
            r#"
version = 1

[brand]
name = "Acme Growth"
email = "hi@acme.test"
phone = "5550100"
instagram = "@acme"
instagram_url = "https://instagram.com/acme"
tagline = "Tag"
experience = "Lots"

[about]
heading = "About"
body = "Hello"
{extra}
"#
        )
    }

    #[test]
    fn stock_content_parses() {
        let content = parse_content(stock_content_toml()).unwrap();
        assert_eq!(content.brand.name, "Growth with Hardik");
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.pricing.len(), 3);
        assert_eq!(content.process.len(), 4);
        assert!(content.warnings().is_empty());
    }

    #[test]
    fn stock_highlights_exactly_medium_plan() {
        let content = parse_content(stock_content_toml()).unwrap();
        let highlighted: Vec<&str> = content
            .pricing
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(highlighted, vec!["medium"]);
    }

    #[test]
    fn highlighted_defaults_to_false() {
        let text = content_with(
            r#"
[[pricing]]
id = "one"
name = "One"
price = "$1"
description = "d"
features = ["a"]
cta = "Go"
"#,
        );
        let content = parse_content(&text).unwrap();
        assert!(!content.pricing[0].highlighted);
    }

    #[test]
    fn tables_are_optional() {
        let content = parse_content(&content_with("")).unwrap();
        assert!(content.services.is_empty());
        assert!(content.pricing.is_empty());
        assert!(content.process.is_empty());
        assert!(content.testimonials.is_empty());
    }

    #[test]
    fn missing_version_is_unsupported() {
        let text = content_with("").replace("version = 1", "");
        let result = parse_content(&text);
        assert!(matches!(result, Err(ContentError::UnsupportedVersion(0))));
    }

    #[test]
    fn future_version_is_unsupported() {
        let text = content_with("").replace("version = 1", "version = 2");
        let result = parse_content(&text);
        assert!(matches!(result, Err(ContentError::UnsupportedVersion(2))));
    }

    #[test]
    fn duplicate_service_id_is_error() {
        let text = content_with(
            r#"
[[services]]
id = "web"
title = "A"
description = "a"
icon = "layout"

[[services]]
id = "web"
title = "B"
description = "b"
icon = "cpu"
"#,
        );
        match parse_content(&text) {
            Err(ContentError::DuplicateKey { table, key }) => {
                assert_eq!(table, "services");
                assert_eq!(key, "web");
            }
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_process_number_is_error() {
        let text = content_with(
            r#"
[[process]]
number = "01"
title = "A"
description = "a"

[[process]]
number = "01"
title = "B"
description = "b"
"#,
        );
        assert!(matches!(
            parse_content(&text),
            Err(ContentError::DuplicateKey { table: "process", .. })
        ));
    }

    #[test]
    fn unknown_icon_is_parse_error() {
        let text = content_with(
            r#"
[[services]]
id = "x"
title = "X"
description = "x"
icon = "sparkles"
"#,
        );
        assert!(matches!(parse_content(&text), Err(ContentError::Toml(_))));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let text = content_with(
            r#"
[[process]]
number = "01"
title = "A"
descripton = "typo"
"#,
        );
        assert!(matches!(parse_content(&text), Err(ContentError::Toml(_))));
    }

    #[test]
    fn multiple_highlighted_is_warning_not_error() {
        let text = content_with(
            r#"
[[pricing]]
id = "a"
name = "A"
price = "1"
description = "d"
features = ["x"]
cta = "Go"
highlighted = true

[[pricing]]
id = "b"
name = "B"
price = "2"
description = "d"
features = ["y"]
cta = "Go"
highlighted = true
"#,
        );
        let content = parse_content(&text).unwrap();
        assert_eq!(
            content.warnings(),
            vec![ContentWarning::MultipleHighlighted {
                ids: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }

    #[test]
    fn empty_features_is_warning() {
        let text = content_with(
            r#"
[[pricing]]
id = "bare"
name = "Bare"
price = "0"
description = "d"
cta = "Go"
"#,
        );
        let content = parse_content(&text).unwrap();
        assert_eq!(
            content.warnings(),
            vec![ContentWarning::EmptyFeatures {
                id: "bare".to_string()
            }]
        );
    }

    #[test]
    fn ordinal_mismatch_is_warning() {
        let text = content_with(
            r#"
[[process]]
number = "01"
title = "A"
description = "a"

[[process]]
number = "03"
title = "B"
description = "b"
"#,
        );
        let warnings = parse_content(&text).unwrap().warnings();
        assert_eq!(
            warnings,
            vec![ContentWarning::OrdinalMismatch {
                position: 2,
                number: "03".to_string()
            }]
        );
        assert_eq!(warnings[0].to_string(), "process step '03' is at position 2");
    }

    // =========================================================================
    // scan tests
    // =========================================================================

    #[test]
    fn scan_empty_dir_uses_stock_content() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.source, ContentSource::Stock);
        assert_eq!(manifest.content.brand.name, "Growth with Hardik");
        assert_eq!(manifest.config.nav.scroll_threshold, 50);
    }

    #[test]
    fn scan_reads_fixture_content_and_config() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.source, ContentSource::File);
        assert_eq!(manifest.content.brand.name, "Studio North");
        assert_eq!(service_ids(&manifest), vec!["reels", "strategy", "ads"]);
        assert_eq!(plan_ids(&manifest), vec!["starter", "pro"]);
        assert_eq!(step_numbers(&manifest), vec!["01", "02", "03"]);
        assert_eq!(manifest.config.form.endpoint, "https://relay.example.test/f/abc123");
        assert!(manifest.warnings.is_empty());
    }

    #[test]
    fn scan_surfaces_content_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONTENT_FILENAME), "version = 7\n").unwrap();
        let result = scan(tmp.path());
        assert!(matches!(
            result,
            Err(ScanError::Content(ContentError::UnsupportedVersion(7)))
        ));
    }

    #[test]
    fn unreadable_content_is_a_content_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONTENT_FILENAME), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::Content(ContentError::Io(_)))
        ));
    }

    #[test]
    fn scan_surfaces_config_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[form]\nendpoint = \"nope\"\n").unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::Config(_))));
    }

    #[test]
    fn manifest_roundtrips_through_json() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(service_ids(&back), service_ids(&manifest));
        assert_eq!(back.source, ContentSource::File);
    }
}
