//! Process timeline. Steps render in table order; `number` is the key.

use super::section_heading;
use crate::behavior::RevealPlan;
use crate::types::ProcessStep;
use maud::{Markup, html};

pub fn render_process(steps: &[ProcessStep], reveal: RevealPlan) -> Markup {
    html! {
        section.process {
            div.container {
                (section_heading("The System", "Your roadmap to dominance."))
                ol.timeline {
                    @for (idx, step) in steps.iter().enumerate() {
                        li.step data-key=(step.number)
                            data-reveal=(reveal.initial().as_attr())
                            style=[reveal.delay_style(idx)] {
                            span.step-ghost aria-hidden="true" { (step.number) }
                            div.step-number { (step.number) }
                            h4 { (step.title) }
                            p { (step.description) }
                            @if idx + 1 < steps.len() {
                                div.step-connector aria-hidden="true" {}
                            }
                        }
                    }
                }
            }
        }
    }
}
