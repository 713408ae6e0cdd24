//! Shared test utilities for the growth-page test suite.
//!
//! Provides fixture setup, sample records, manifest extractors, and small
//! HTML matchers for asserting on rendered sections.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! assert_eq!(service_ids(&manifest), vec!["reels", "strategy", "ads"]);
//! ```

use regex::Regex;
use std::path::Path;
use tempfile::TempDir;

use crate::behavior::RevealPlan;
use crate::content::Manifest;
use crate::types::BrandInfo;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Sample records
// =========================================================================

/// The fixture brand, built in code.
pub fn sample_brand() -> BrandInfo {
    BrandInfo {
        name: "Studio North".to_string(),
        email: "hello@studionorth.test".to_string(),
        phone: "5550142".to_string(),
        phone_prefix: "+1".to_string(),
        instagram: "@studionorth".to_string(),
        instagram_url: "https://instagram.com/studionorth".to_string(),
        tagline: "Short-form video for local brands.".to_string(),
        experience: "40 brands, 3 cities".to_string(),
        footer_blurb: None,
        linkedin_url: None,
        twitter_url: None,
    }
}

pub fn reveal_on() -> RevealPlan {
    RevealPlan {
        enabled: true,
        stagger_ms: 100,
    }
}

pub fn reveal_off() -> RevealPlan {
    RevealPlan {
        enabled: false,
        stagger_ms: 100,
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Service ids in table order.
pub fn service_ids(manifest: &Manifest) -> Vec<&str> {
    manifest
        .content
        .services
        .iter()
        .map(|s| s.id.as_str())
        .collect()
}

/// Pricing plan ids in table order.
pub fn plan_ids(manifest: &Manifest) -> Vec<&str> {
    manifest
        .content
        .pricing
        .iter()
        .map(|p| p.id.as_str())
        .collect()
}

/// Process step ordinals in table order.
pub fn step_numbers(manifest: &Manifest) -> Vec<&str> {
    manifest
        .content
        .process
        .iter()
        .map(|s| s.number.as_str())
        .collect()
}

// =========================================================================
// HTML matchers
// =========================================================================

/// `href` values of anchors whose class list starts with `class`.
pub fn hrefs_with_class(html: &str, class: &str) -> Vec<String> {
    let pattern = format!(
        r#"<a class="{}[^"]*" href="([^"]*)""#,
        regex::escape(class)
    );
    let re = Regex::new(&pattern).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

/// All `data-key` values in document order.
pub fn data_keys(html: &str) -> Vec<String> {
    let re = Regex::new(r#"data-key="([^"]*)""#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}

/// Number of elements carrying `class` as a whole word in their class list.
pub fn count_class(html: &str, class: &str) -> usize {
    let pattern = format!(
        r#"class="(?:[^"]*\s)?{}(?:\s[^"]*)?""#,
        regex::escape(class)
    );
    let re = Regex::new(&pattern).unwrap();
    re.find_iter(html).count()
}

/// `data-reveal` values on elements, in document order. Ignores the same
/// text inside inline `<style>` or `<script>` selectors.
pub fn reveal_states(html: &str) -> Vec<String> {
    let re = Regex::new(r#"\sdata-reveal="([^"]*)""#).unwrap();
    re.captures_iter(html).map(|c| c[1].to_string()).collect()
}
