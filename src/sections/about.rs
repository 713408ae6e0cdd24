//! About section (`#about`). The bio is markdown.

use super::section_heading;
use crate::behavior::RevealPlan;
use crate::types::About;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Convert the about body from markdown to HTML.
pub fn render_markdown(body: &str) -> String {
    let parser = Parser::new(body);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

pub fn render_about(about: &About, reveal: RevealPlan) -> Markup {
    let state = reveal.initial().as_attr();
    html! {
        section.about id="about" {
            div.container.about-grid {
                div.about-copy data-reveal=(state) {
                    (section_heading(&about.eyebrow, &about.heading))
                    div.prose { (PreEscaped(render_markdown(&about.body))) }
                    @if !about.facts.is_empty() {
                        div.facts {
                            @for fact in &about.facts {
                                div.fact {
                                    div.fact-value { (fact.value) }
                                    div.fact-label { (fact.label) }
                                }
                            }
                        }
                    }
                }
                @if let Some(src) = &about.image_url {
                    figure.about-portrait data-reveal=(state) {
                        img src=(src) alt=(about.image_alt) loading="lazy";
                        @if let Some(title) = &about.callout_title {
                            figcaption.callout {
                                div.callout-title { (title) }
                                p { (about.callout_text) }
                            }
                        }
                    }
                }
            }
        }
    }
}
