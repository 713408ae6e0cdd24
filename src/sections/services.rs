//! Services grid (`#services`).

use super::section_heading;
use crate::behavior::RevealPlan;
use crate::types::Service;
use maud::{Markup, html};

pub fn render_services(services: &[Service], reveal: RevealPlan) -> Markup {
    html! {
        section.services id="services" {
            div.container {
                (section_heading("Expert Solutions", "Services that scale."))
                div.card-grid.cols-3 {
                    @for (idx, service) in services.iter().enumerate() {
                        article.card.service-card data-key=(service.id)
                            data-reveal=(reveal.initial().as_attr())
                            style=[reveal.delay_style(idx)] {
                            div.service-icon { (service.icon.svg(24)) }
                            h4 { (service.title) }
                            p { (service.description) }
                        }
                    }
                }
            }
        }
    }
}
