//! Results section (`#results`): headline stats and testimonials.

use super::section_heading;
use crate::behavior::RevealPlan;
use crate::types::{Stat, Testimonial};
use maud::{Markup, html};

pub fn render_results(stats: &[Stat], testimonials: &[Testimonial], reveal: RevealPlan) -> Markup {
    html! {
        section.results.inverted id="results" {
            div.container {
                (section_heading("Proven Credibility", "Real results. No fluff."))
                div.stat-grid {
                    @for (idx, stat) in stats.iter().enumerate() {
                        article.stat-card data-reveal=(reveal.initial().as_attr())
                            style=[reveal.delay_style(idx)] {
                            div.stat-value {
                                (stat.value)
                                span.stat-suffix { (stat.suffix) }
                            }
                            h4 { (stat.title) }
                            p { (stat.description) }
                        }
                    }
                }
                @for testimonial in testimonials {
                    blockquote.testimonial data-reveal=(reveal.initial().as_attr()) {
                        p.quote { "\u{201c}" (testimonial.quote) "\u{201d}" }
                        footer.attribution {
                            div.avatar aria-hidden="true" {}
                            div {
                                div.author { (testimonial.author) }
                                div.role { (testimonial.role) }
                            }
                        }
                    }
                }
            }
        }
    }
}
