//! Site footer.

use super::logo;
use crate::icons::Icon;
use crate::types::BrandInfo;
use maud::{Markup, html};

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Services", "#services"),
    ("Pricing", "#pricing"),
    ("Results", "#results"),
];

/// `year` is the copyright year, resolved from config or the build clock.
pub fn render_footer(brand: &BrandInfo, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-top {
                    div.footer-brand {
                        a.brand href="#" {
                            (logo(brand, "md"))
                            span.brand-name { (brand.name) }
                        }
                        p.footer-blurb { (brand.footer_blurb()) }
                        div.footer-icons {
                            a.icon-button href=(brand.instagram_url) aria-label="Instagram" {
                                (Icon::Instagram.svg(22))
                            }
                            a.icon-button href=(brand.mailto()) aria-label="Email" {
                                (Icon::Mail.svg(22))
                            }
                        }
                    }
                    div.footer-columns {
                        div.footer-column {
                            h5 { "Navigation" }
                            ul {
                                @for (label, href) in FOOTER_LINKS {
                                    li { a href=(href) { (label) } }
                                }
                            }
                        }
                        div.footer-column {
                            h5 { "Social" }
                            ul {
                                li {
                                    a href=(brand.instagram_url) {
                                        "Instagram " (Icon::ExternalLink.svg(14))
                                    }
                                }
                                @if let Some(url) = &brand.linkedin_url {
                                    li { a href=(url) { "LinkedIn" } }
                                }
                                @if let Some(url) = &brand.twitter_url {
                                    li { a href=(url) { "Twitter" } }
                                }
                            }
                        }
                    }
                }
                div.footer-legal {
                    p { "© " (year) " " (brand.name) ". Crafted for creators." }
                    div.legal-links {
                        a href="#" { "Privacy Policy" }
                        a href="#" { "Terms of Service" }
                    }
                }
            }
        }
    }
}
