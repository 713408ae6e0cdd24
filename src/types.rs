//! Content model shared by the scan and generate stages.
//!
//! Every record here is plain, immutable data deserialized from
//! `content.toml`. Nothing in the render path mutates it; sections borrow the
//! slice they need from the [`Manifest`](crate::content::Manifest).

use crate::icons::Icon;
use serde::{Deserialize, Serialize};

/// Brand and contact details referenced by the nav, contact and footer.
///
/// Constructed once during scan and passed by reference everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Country prefix shown before the phone number in contact details.
    #[serde(default = "default_phone_prefix")]
    pub phone_prefix: String,
    /// Display handle, including the leading `@`.
    pub instagram: String,
    pub instagram_url: String,
    pub tagline: String,
    pub experience: String,
    /// Footer paragraph under the logo. Falls back to `tagline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_blurb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
}

fn default_phone_prefix() -> String {
    "+91".to_string()
}

impl BrandInfo {
    /// First letter of the brand name, used as the logo mark.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .next_back()
            .and_then(|w| w.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn footer_blurb(&self) -> &str {
        self.footer_blurb.as_deref().unwrap_or(&self.tagline)
    }
}

/// Hero copy. Every field has a default, so `[hero]` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    /// Second line of the headline, drawn muted.
    pub headline_muted: String,
    pub lead: String,
    pub cta: String,
    pub proof_value: String,
    pub proof_label: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            badge: "Join 100+ Brands & Creators".to_string(),
            headline: "Master the".to_string(),
            headline_muted: "Growth Game.".to_string(),
            lead: "We help ambitious creators and businesses dominate Instagram using content strategy, AI-powered automation, and high-performance design.".to_string(),
            cta: "Get a Free Growth Audit".to_string(),
            proof_value: "200%".to_string(),
            proof_label: "Reach Increase".to_string(),
        }
    }
}

/// A service card in the services grid. `id` is the rendering key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

/// A pricing tier.
///
/// `price` is a display label ("Custom", "$499/mo"), never parsed.
/// At most one plan should set `highlighted`; a second one is reported as a
/// warning at scan time, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

/// One step on the process timeline.
///
/// `number` is the display ordinal and the rendering key. It is not derived
/// from the step's position in the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

/// A headline number in the results section, e.g. `200` + `%`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    #[serde(default)]
    pub suffix: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// About section copy. `body` is markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    #[serde(default = "default_about_eyebrow")]
    pub eyebrow: String,
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    /// Floating card over the portrait.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout_title: Option<String>,
    #[serde(default)]
    pub callout_text: String,
}

fn default_about_eyebrow() -> String {
    "About".to_string()
}

/// A small figure next to the about copy, e.g. "100+" / "Happy Clients".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fact {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str) -> BrandInfo {
        BrandInfo {
            name: name.to_string(),
            email: "hi@example.com".to_string(),
            phone: "5550100".to_string(),
            phone_prefix: default_phone_prefix(),
            instagram: "@x".to_string(),
            instagram_url: "https://instagram.com/x".to_string(),
            tagline: "Tagline".to_string(),
            experience: String::new(),
            footer_blurb: None,
            linkedin_url: None,
            twitter_url: None,
        }
    }

    #[test]
    fn monogram_uses_last_word() {
        assert_eq!(brand("Growth with Hardik").monogram(), "H");
        assert_eq!(brand("studio").monogram(), "S");
        assert_eq!(brand("").monogram(), "");
    }

    #[test]
    fn contact_links() {
        let b = brand("A");
        assert_eq!(b.mailto(), "mailto:hi@example.com");
        assert_eq!(b.tel(), "tel:5550100");
    }

    #[test]
    fn footer_blurb_falls_back_to_tagline() {
        let mut b = brand("A");
        assert_eq!(b.footer_blurb(), "Tagline");
        b.footer_blurb = Some("Custom".to_string());
        assert_eq!(b.footer_blurb(), "Custom");
    }
}
