//! Page sections.
//!
//! Each section is a pure function from a slice of the content model to
//! [`Markup`]. None of them hold state; the only dynamic behavior they
//! express is the initial `data-reveal` flag on blocks that animate in.
//!
//! | Module | Renders |
//! |--------|---------|
//! | [`nav`] | Fixed header, desktop links, mobile menu |
//! | [`hero`] | Headline, lead, primary call to action |
//! | [`about`] | Markdown bio, facts, portrait |
//! | [`results`] | Headline stats and testimonials (`#results`) |
//! | [`services`] | Services grid (`#services`) |
//! | [`pricing`] | Pricing tiers (`#pricing`) |
//! | [`process`] | Numbered timeline |
//! | [`contact`] | Contact form (`#contact`) and contact details |
//! | [`footer`] | Brand, link columns, legal line |

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod pricing;
pub mod process;
pub mod results;
pub mod services;

use crate::types::BrandInfo;
use maud::{Markup, html};

/// The square monogram used in the nav, hero and footer.
pub fn logo(brand: &BrandInfo, size: &str) -> Markup {
    html! {
        div class={ "logo logo-" (size) } aria-hidden="true" { (brand.monogram()) }
    }
}

/// Small uppercase eyebrow over a large section title.
pub fn section_heading(eyebrow: &str, title: &str) -> Markup {
    html! {
        header.section-heading {
            h2.eyebrow { (eyebrow) }
            h3.section-title { (title) }
        }
    }
}
