//! Contact form (`#contact`) and the contact details strip below it.
//!
//! The form is a native POST to the configured relay. No script touches it.

use super::section_heading;
use crate::behavior::RevealPlan;
use crate::form::{CONTACT_FIELDS, FieldKind, FormField};
use crate::icons::Icon;
use crate::types::BrandInfo;
use maud::{Markup, html};

pub const SUBMIT_LABEL: &str = "Book Your Free Instagram Growth Audit";

pub fn render_contact_form(endpoint: &str, reveal: RevealPlan) -> Markup {
    html! {
        section.contact id="contact" {
            div.container.contact-grid {
                div.contact-copy {
                    (section_heading("Take the Leap", "Let's audit your brand."))
                    p.lead {
                        "Scale your impact with a free 1:1 strategy session. We'll find the gaps in your growth and build a roadmap to 200% reach."
                    }
                    p.availability {
                        (Icon::CheckCircle.svg(16))
                        " Limited spots available this month"
                    }
                }
                div.contact-panel data-reveal=(reveal.initial().as_attr()) {
                    form.contact-form action=(endpoint) method="POST" {
                        @for field in CONTACT_FIELDS {
                            (render_field(field))
                        }
                        button.btn.btn-primary.btn-block.btn-submit type="submit" {
                            (SUBMIT_LABEL)
                            (Icon::ArrowRight.svg(24))
                        }
                    }
                }
            }
        }
    }
}

fn render_field(field: &FormField) -> Markup {
    let id = format!("field-{}", field.name);
    html! {
        div class={ "field field-" (field.name) } {
            label for=(id) { (field.label) }
            @match field.kind {
                FieldKind::TextArea { rows } => {
                    textarea id=(id) name=(field.name) rows=(rows)
                        placeholder=(field.placeholder) required {}
                }
                kind => {
                    @let input_type = if kind == FieldKind::Email { "email" } else { "text" };
                    @if let Some(prefix) = field.prefix {
                        div.input-prefixed {
                            span.input-prefix aria-hidden="true" { (prefix) }
                            input id=(id) type=(input_type) name=(field.name)
                                placeholder=(field.placeholder) required;
                        }
                    } @else {
                        input id=(id) type=(input_type) name=(field.name)
                            placeholder=(field.placeholder) required;
                    }
                }
            }
        }
    }
}

/// Email, phone and Instagram cards.
pub fn render_contact_details(brand: &BrandInfo) -> Markup {
    html! {
        section.contact-details.tinted {
            div.container.card-grid.cols-3 {
                a.detail-card href=(brand.mailto()) {
                    div.detail-icon { (Icon::Mail.svg(24)) }
                    div {
                        p.detail-label { "Email Us" }
                        p.detail-value { (brand.email) }
                    }
                }
                a.detail-card href=(brand.tel()) {
                    div.detail-icon { (Icon::Phone.svg(24)) }
                    div {
                        p.detail-label { "Call Directly" }
                        p.detail-value { (brand.phone_prefix) " " (brand.phone) }
                    }
                }
                a.detail-card href=(brand.instagram_url) target="_blank" rel="noopener noreferrer" {
                    div.detail-icon { (Icon::Instagram.svg(24)) }
                    div {
                        p.detail-label { "Follow On IG" }
                        p.detail-value { (brand.instagram) }
                    }
                }
            }
        }
    }
}
