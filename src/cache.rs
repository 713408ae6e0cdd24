//! Build stamp for skipping unchanged rebuilds.
//!
//! Rendering one page is cheap, but rewriting `index.html` on every run
//! churns file watchers and deploy diffs. The generate stage records a
//! content version in `<output_dir>/build.json` and skips the rewrite when
//! nothing that feeds the page has changed.
//!
//! ## Content version
//!
//! SHA-256 over, in order:
//! - the generator version (`CARGO_PKG_VERSION`), so a new binary with new
//!   templates or styles always rebuilds,
//! - the manifest JSON exactly as written by the scan stage,
//! - every file under the content directory's `assets/`, as
//!   `relative path \0 contents`, walked in sorted order.
//!
//! A skip requires a matching stamp **and** an existing `index.html`.
//! `--force` bypasses the stamp entirely.

use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the stamp file within the output directory.
pub const STAMP_FILENAME: &str = "build.json";

/// Version of the stamp format. Bump to invalidate every existing stamp.
const STAMP_VERSION: u32 = 1;

/// On-disk record of the last successful generate.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BuildStamp {
    pub version: u32,
    /// Hex SHA-256 content version.
    pub content_version: String,
    pub generator: String,
}

impl BuildStamp {
    pub fn new(content_version: String) -> Self {
        Self {
            version: STAMP_VERSION,
            content_version,
            generator: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Load from the output directory. Returns `None` if the file doesn't
    /// exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(output_dir.join(STAMP_FILENAME)).ok()?;
        let stamp: Self = serde_json::from_str(&content).ok()?;
        (stamp.version == STAMP_VERSION).then_some(stamp)
    }

    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(output_dir.join(STAMP_FILENAME), json)
    }

    /// Whether a previous build with this stamp can be reused as-is.
    pub fn is_current(&self, content_version: &str, output_dir: &Path) -> bool {
        self.content_version == content_version && output_dir.join("index.html").is_file()
    }
}

/// Compute the content version for a manifest and an optional assets tree.
///
/// `year` is the footer year the page will print. It is hashed separately
/// because an unset `copyright_year` resolves at build time and never
/// reaches the manifest.
pub fn content_version(manifest_json: &str, year: i32, assets_dir: &Path) -> io::Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
    hasher.update(b"\0");
    hasher.update(year.to_le_bytes());
    hasher.update(b"\0");
    hasher.update(manifest_json.as_bytes());

    if assets_dir.is_dir() {
        for entry in WalkDir::new(assets_dir).sort_by_file_name() {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(assets_dir)
                .map_err(io::Error::other)?;
            hasher.update(b"\0");
            hasher.update(rel.to_string_lossy().as_bytes());
            hasher.update(b"\0");
            hasher.update(std::fs::read(entry.path())?);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}
