//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest and writes the finished
//! single-page site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html     # The whole page: inline CSS, inline script
//! ├── build.json     # Content version of the last generate
//! └── ...            # Everything under content/assets/, copied verbatim
//! ```
//!
//! ## Page Layout
//!
//! ```text
//! nav#site-nav
//! main
//!   hero, #about, #results, #services, #pricing, process,
//!   #contact (form), contact details
//! footer
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and reveal timing injected from config)
//! - `static/site.js`: Nav scroll flag, mobile menu, reveal-on-scroll
//!
//! The script reads everything it needs from `data-*` attributes on the
//! rendered markup, so it has no configuration of its own.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::behavior::{NavState, RevealPlan};
use crate::cache::{self, BuildStamp};
use crate::config;
use crate::content::Manifest;
use crate::sections::{about, contact, footer, hero, nav, pricing, process, results, services};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Directory inside the content root whose files are copied to the output.
pub const ASSETS_DIR: &str = "assets";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// What a generate run did.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub content_version: String,
    /// `true` when the stamp matched and nothing was written.
    pub skipped: bool,
    pub assets_copied: usize,
    pub warnings: usize,
}

pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
    force: bool,
) -> Result<GenerateReport, GenerateError> {
    let manifest_json = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_json)?;
    let year = manifest.config.copyright_year();
    write_site(&manifest_json, &manifest, year, source_dir, output_dir, force)
}

/// Write the site for an already-parsed manifest with the footer year fixed.
fn write_site(
    manifest_json: &str,
    manifest: &Manifest,
    year: i32,
    source_dir: &Path,
    output_dir: &Path,
    force: bool,
) -> Result<GenerateReport, GenerateError> {
    let assets_dir = source_dir.join(ASSETS_DIR);
    let content_version = cache::content_version(manifest_json, year, &assets_dir)?;

    if !force
        && BuildStamp::load(output_dir).is_some_and(|s| s.is_current(&content_version, output_dir))
    {
        return Ok(GenerateReport {
            output_dir: output_dir.to_path_buf(),
            content_version,
            skipped: true,
            assets_copied: 0,
            warnings: manifest.warnings.len(),
        });
    }

    fs::create_dir_all(output_dir)?;
    let assets_copied = copy_assets(&assets_dir, output_dir)?;

    let page = render_page_for_year(manifest, year);
    fs::write(output_dir.join("index.html"), page.into_string())?;

    BuildStamp::new(content_version.clone()).save(output_dir)?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        content_version,
        skipped: false,
        assets_copied,
        warnings: manifest.warnings.len(),
    })
}

/// Copy every file under `src` into `dst`, preserving relative paths.
/// A missing `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> std::io::Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Full stylesheet: config-derived custom properties, then the static rules.
pub fn site_css(config: &config::SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_reveal_css(&config.reveal),
        CSS_STATIC
    )
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    lang: &str,
    description: &str,
    css: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Assemble the page from a manifest.
pub fn render_page(manifest: &Manifest) -> Markup {
    render_page_for_year(manifest, manifest.config.copyright_year())
}

fn render_page_for_year(manifest: &Manifest, year: i32) -> Markup {
    let config = &manifest.config;
    let content = &manifest.content;
    let brand = &content.brand;
    let reveal = RevealPlan::from_config(&config.reveal);

    let body = html! {
        (nav::render_nav(brand, NavState::default(), config.nav.scroll_threshold))
        main {
            (hero::render_hero(&content.hero, brand))
            (about::render_about(&content.about, reveal))
            (results::render_results(&content.stats, &content.testimonials, reveal))
            (services::render_services(&content.services, reveal))
            (pricing::render_pricing(&content.pricing, reveal))
            (process::render_process(&content.process, reveal))
            (contact::render_contact_form(&config.form.endpoint, reveal))
            (contact::render_contact_details(brand))
        }
        (footer::render_footer(brand, year))
    };

    base_document(
        &config.site.title,
        &config.site.lang,
        &config.site.description,
        &site_css(config),
        body,
    )
}
