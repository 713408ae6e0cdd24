//! Navigation shell.
//!
//! Rendered from a [`NavState`] (normally the default: top of page, menu
//! closed). The inline script keeps the same two flags in sync afterwards:
//! `is-scrolled` on the `<nav>` and `hidden` on the mobile menu.

use super::logo;
use crate::behavior::{CTA_HREF, NAV_LINKS, NavState};
use crate::icons::Icon;
use crate::types::BrandInfo;
use maud::{Markup, html};

pub fn render_nav(brand: &BrandInfo, state: NavState, scroll_threshold: u32) -> Markup {
    html! {
        nav id="site-nav" class=(state.nav_class()) data-scroll-threshold=(scroll_threshold) {
            div.container.nav-bar {
                a.brand href="#" {
                    (logo(brand, "sm"))
                    span.brand-name { (brand.name) }
                }
                div.nav-links {
                    @for link in NAV_LINKS {
                        a.nav-link href=(link.href) { (link.label) }
                    }
                    a.btn.btn-primary.btn-pill href=(CTA_HREF) { "Audit Now" }
                }
                button.menu-toggle type="button" aria-controls="mobile-menu"
                    aria-expanded=(state.menu_open) aria-label="Toggle menu" {
                    span.menu-icon-open { (Icon::Menu.svg(24)) }
                    span.menu-icon-close { (Icon::X.svg(24)) }
                }
            }
            div.mobile-menu id="mobile-menu" hidden[!state.menu_open] {
                @for link in NAV_LINKS {
                    a.mobile-link href=(link.href) data-closes-menu { (link.label) }
                }
                a.btn.btn-primary.btn-block href=(CTA_HREF) data-closes-menu {
                    "Free Instagram Audit"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn initial_nav_is_transparent_and_closed() {
        let html = render_nav(&sample_brand(), NavState::default(), 50).into_string();
        assert!(html.contains(r#"class="site-nav""#));
        assert!(html.contains(r#"data-scroll-threshold="50""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"id="mobile-menu" hidden"#));
    }

    #[test]
    fn scrolled_state_renders_opaque_class() {
        let state = NavState {
            scrolled: true,
            menu_open: false,
        };
        let html = render_nav(&sample_brand(), state, 50).into_string();
        assert!(html.contains(r#"class="site-nav is-scrolled""#));
    }

    #[test]
    fn open_menu_is_not_hidden() {
        let mut state = NavState::default();
        state.toggle_menu();
        let html = render_nav(&sample_brand(), state, 50).into_string();
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(!html.contains(r#"id="mobile-menu" hidden"#));
    }

    #[test]
    fn mobile_menu_mirrors_desktop_links() {
        let html = render_nav(&sample_brand(), NavState::default(), 50).into_string();
        let desktop = hrefs_with_class(&html, "nav-link");
        let mobile = hrefs_with_class(&html, "mobile-link");
        assert_eq!(
            desktop,
            vec!["#about", "#services", "#results", "#pricing", "#contact"]
        );
        assert_eq!(desktop, mobile);
    }

    #[test]
    fn every_mobile_link_closes_the_menu() {
        let html = render_nav(&sample_brand(), NavState::default(), 50).into_string();
        // Five anchors plus the call to action
        assert_eq!(html.matches("data-closes-menu").count(), NAV_LINKS.len() + 1);
    }

    #[test]
    fn brand_name_shown() {
        let html = render_nav(&sample_brand(), NavState::default(), 50).into_string();
        assert!(html.contains("Studio North"));
    }
}
