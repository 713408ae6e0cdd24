//! CLI output formatting for the pipeline stages.
//!
//! # Information-First Display
//!
//! Output reads as a content inventory: every record leads with its
//! positional index and display title, with its rendering key and details
//! shown as secondary context. Warnings come last so they are the final
//! thing on screen.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Brand
//!     Studio North
//!     Source: content.toml
//!
//! Services (3)
//! 001 Reels Production [reels]
//! 002 Content Strategy [strategy]
//!
//! Pricing (2)
//! 001 Starter: $400 (2 features) [starter]
//! 002 Pro: $900 (3 features) [pro] *recommended*
//!
//! Process (3)
//! 001 Call [01]
//!
//! Results
//!     1 stat, 1 testimonial
//!
//! Config
//!     config.toml
//!     assets/
//!     Form relay: https://relay.example.test/f/abc123
//!
//! Warnings
//!     pricing plan 'bare' has no features
//! ```
//!
//! ## Generate
//!
//! ```text
//! index.html (content 3f2a9c1d)
//! Copied 2 assets
//! Site generated at dist
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::content::{ContentSource, Manifest};
use crate::generate::GenerateReport;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section header with an item count.
///
/// ```text
/// Services (6)
/// ```
fn section_header(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

/// Record line: positional index, title, and rendering key.
///
/// ```text
/// 001 Reels Production [reels]
/// ```
fn record_line(index: usize, title: &str, key: &str) -> String {
    format!("{} {} [{}]", format_index(index), title, key)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// First eight characters of a content version.
fn short_version(version: &str) -> &str {
    version.get(..8).unwrap_or(version)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the loaded content tables.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let content = &manifest.content;

    lines.push("Brand".to_string());
    lines.push(format!("{}{}", indent(1), content.brand.name));
    let source = match manifest.source {
        ContentSource::File => "content.toml",
        ContentSource::Stock => "stock content",
    };
    lines.push(format!("{}Source: {}", indent(1), source));

    lines.push(String::new());
    lines.push(section_header("Services", content.services.len()));
    for (i, service) in content.services.iter().enumerate() {
        lines.push(record_line(i + 1, &service.title, &service.id));
    }

    lines.push(String::new());
    lines.push(section_header("Pricing", content.pricing.len()));
    for (i, plan) in content.pricing.iter().enumerate() {
        let marker = if plan.highlighted { " *recommended*" } else { "" };
        lines.push(format!(
            "{} {}: {} ({}) [{}]{}",
            format_index(i + 1),
            plan.name,
            plan.price,
            plural(plan.features.len(), "feature", "features"),
            plan.id,
            marker
        ));
    }

    lines.push(String::new());
    lines.push(section_header("Process", content.process.len()));
    for (i, step) in content.process.iter().enumerate() {
        lines.push(record_line(i + 1, &step.title, &step.number));
    }

    lines.push(String::new());
    lines.push("Results".to_string());
    lines.push(format!(
        "{}{}, {}",
        indent(1),
        plural(content.stats.len(), "stat", "stats"),
        plural(content.testimonials.len(), "testimonial", "testimonials")
    ));

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(crate::generate::ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), crate::generate::ASSETS_DIR));
    }
    lines.push(format!(
        "{}Form relay: {}",
        indent(1),
        manifest.config.form.endpoint
    ));

    if !manifest.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &manifest.warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let version = short_version(&report.content_version);
    if report.skipped {
        return vec![
            format!("index.html unchanged (content {})", version),
            "Skipped; pass --force to rebuild".to_string(),
        ];
    }

    let mut lines = vec![format!("index.html (content {})", version)];
    if report.assets_copied > 0 {
        lines.push(format!(
            "Copied {}",
            plural(report.assets_copied, "asset", "assets")
        ));
    }
    if report.warnings > 0 {
        lines.push(format!(
            "Built with {}",
            plural(report.warnings, "warning", "warnings")
        ));
    }
    lines.push(format!("Site generated at {}", report.output_dir.display()));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
