//! Hero section: the first screen.

use super::logo;
use crate::behavior::CTA_HREF;
use crate::icons::Icon;
use crate::types::{BrandInfo, Hero};
use maud::{Markup, html};

/// The hero animates on load rather than on scroll, so it carries no
/// `data-reveal` flag.
pub fn render_hero(hero: &Hero, brand: &BrandInfo) -> Markup {
    html! {
        section.hero {
            div.container.hero-inner.enter {
                div.hero-logo { (logo(brand, "lg")) }
                span.badge {
                    (Icon::TrendingUp.svg(14))
                    (hero.badge)
                }
                h1.hero-title {
                    (hero.headline) " "
                    br.wide-only;
                    span.muted { (hero.headline_muted) }
                }
                p.hero-lead { (hero.lead) }
                div.hero-actions {
                    a.btn.btn-primary.btn-lg href=(CTA_HREF) {
                        (hero.cta)
                        (Icon::ArrowRight.svg(24))
                    }
                    p.proof {
                        span.proof-value { (hero.proof_value) }
                        " " (hero.proof_label)
                    }
                }
            }
            div.hero-glow aria-hidden="true" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_brand;

    #[test]
    fn hero_uses_default_copy() {
        let html = render_hero(&Hero::default(), &sample_brand()).into_string();
        assert!(html.contains("Growth Game."));
        assert!(html.contains("Join 100+ Brands &amp; Creators"));
        assert!(html.contains(r##"href="#contact""##));
    }

    #[test]
    fn hero_copy_is_configurable() {
        let hero = Hero {
            headline: "Grow".to_string(),
            headline_muted: "faster.".to_string(),
            ..Hero::default()
        };
        let html = render_hero(&hero, &sample_brand()).into_string();
        assert!(html.contains("Grow"));
        assert!(html.contains(r#"<span class="muted">faster.</span>"#));
    }
}
