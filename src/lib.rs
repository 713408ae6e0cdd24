//! # Growth Page
//!
//! A static site generator for a single-page personal marketing site: hero,
//! about, results, services, pricing, process, a contact form, and a footer.
//! All copy lives in one versioned `content.toml`; look and behavior knobs
//! live in `config.toml`.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (TOML → validated content + config)
//! 2. Generate  manifest  →  dist/            (index.html, assets, build.json)
//! ```
//!
//! The manifest is human-readable JSON you can inspect between stages, and
//! its hash is what lets generate skip a rewrite when nothing changed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Stage 1: loads and validates `content.toml`, produces the manifest |
//! | [`generate`] | Stage 2: renders the page from the manifest using Maud |
//! | [`sections`] | One renderer per page section |
//! | [`behavior`] | Nav, menu and reveal state machines mirrored by the inline script |
//! | [`form`] | Contact form fields, native validation and body encoding |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Content records: brand, services, plans, steps, stats |
//! | [`icons`] | Inline SVG icon set |
//! | [`cache`] | Content version and `build.json` stamp |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Self-Contained Page
//!
//! The output is a single `index.html` with inline CSS and a small inline
//! script. Nothing to fetch before first paint, nothing to version, and the
//! file can be dropped on any static host.
//!
//! ## Behavior as Data Attributes
//!
//! The page has three dynamic behaviors: the nav turns opaque after a scroll
//! threshold, the mobile menu toggles, and blocks reveal once on scroll.
//! Their rules live in [`behavior`] as plain state machines. The renderer
//! writes the initial state into `data-*` attributes and classes; the
//! script only flips those same flags.
//!
//! ## Native Form Submission
//!
//! The contact form posts straight to a third-party relay with the browser's
//! own validation and encoding. [`form::Submission`] reproduces that request
//! so tests can check what the relay receives.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Templates are checked at compile time, auto-escaped, and ship
//! inside the binary.

pub mod behavior;
pub mod cache;
pub mod config;
pub mod content;
pub mod form;
pub mod generate;
pub mod icons;
pub mod output;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
