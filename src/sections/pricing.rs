//! Pricing tiers (`#pricing`).
//!
//! A plan with `highlighted = true` gets the elevated card and the
//! "Top Recommended" badge. Nothing stops several plans from being
//! highlighted; scan reports it as a warning.

use super::section_heading;
use crate::behavior::{CTA_HREF, RevealPlan};
use crate::icons::Icon;
use crate::types::PricingPlan;
use maud::{Markup, html};

pub const RECOMMENDED_BADGE: &str = "Top Recommended";

pub fn render_pricing(plans: &[PricingPlan], reveal: RevealPlan) -> Markup {
    html! {
        section.pricing.tinted id="pricing" {
            div.container {
                (section_heading("Investment", "Flexible plans for every stage."))
                div.card-grid.cols-3 {
                    @for (idx, plan) in plans.iter().enumerate() {
                        (render_plan(plan, idx, reveal))
                    }
                }
            }
        }
    }
}

fn render_plan(plan: &PricingPlan, idx: usize, reveal: RevealPlan) -> Markup {
    let card_class = if plan.highlighted {
        "card plan-card is-highlighted"
    } else {
        "card plan-card"
    };
    let cta_class = if plan.highlighted {
        "btn btn-primary btn-block"
    } else {
        "btn btn-secondary btn-block"
    };
    html! {
        article class=(card_class) data-key=(plan.id)
            data-reveal=(reveal.initial().as_attr()) style=[reveal.delay_style(idx)] {
            @if plan.highlighted {
                div.plan-badge { (RECOMMENDED_BADGE) }
            }
            header.plan-header {
                h4.plan-name { (plan.name) }
                div.plan-price { (plan.price) }
                p.plan-description { (plan.description) }
            }
            ul.plan-features {
                @for feature in &plan.features {
                    li {
                        (Icon::CheckCircle.svg(20))
                        span { (feature) }
                    }
                }
            }
            a class=(cta_class) href=(CTA_HREF) { (plan.cta) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn plan(id: &str, highlighted: bool, features: &[&str]) -> PricingPlan {
        PricingPlan {
            id: id.to_string(),
            name: format!("{id} plan"),
            price: "Custom".to_string(),
            description: "desc".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            cta: "Get Started".to_string(),
            highlighted,
        }
    }

    #[test]
    fn one_card_per_plan() {
        let plans = vec![
            plan("basic", false, &["A"]),
            plan("medium", true, &["B", "C"]),
            plan("advanced", false, &["D"]),
        ];
        let html = render_pricing(&plans, reveal_on()).into_string();
        assert_eq!(count_class(&html, "plan-card"), 3);
        assert_eq!(data_keys(&html), vec!["basic", "medium", "advanced"]);
    }

    #[test]
    fn single_highlighted_plan_gets_badge() {
        let plans = vec![plan("basic", false, &["A"]), plan("medium", true, &["B"])];
        let html = render_pricing(&plans, reveal_on()).into_string();
        assert_eq!(html.matches("is-highlighted").count(), 1);
        assert_eq!(html.matches(RECOMMENDED_BADGE).count(), 1);
        assert_eq!(html.matches("btn-primary").count(), 1);
        // The badge sits inside the medium card
        let medium = html.find(r#"data-key="medium""#).unwrap();
        assert!(html.find(RECOMMENDED_BADGE).unwrap() > medium);
    }

    #[test]
    fn no_highlighted_plan_is_uniform() {
        let plans = vec![plan("a", false, &["x"]), plan("b", false, &["y"])];
        let html = render_pricing(&plans, reveal_on()).into_string();
        assert!(!html.contains("is-highlighted"));
        assert!(!html.contains(RECOMMENDED_BADGE));
        assert_eq!(html.matches("btn-secondary").count(), 2);
    }

    #[test]
    fn features_listed_in_order() {
        let html = render_pricing(&[plan("p", false, &["First", "Second"])], reveal_on())
            .into_string();
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[test]
    fn empty_features_render_empty_list() {
        let html = render_pricing(&[plan("p", false, &[])], reveal_on()).into_string();
        assert!(html.contains(r#"<ul class="plan-features"></ul>"#));
    }

    #[test]
    fn cta_links_to_contact() {
        let html = render_pricing(&[plan("p", false, &["x"])], reveal_on()).into_string();
        assert!(html.contains(r##"href="#contact">Get Started</a>"##));
    }
}
