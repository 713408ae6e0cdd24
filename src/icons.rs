//! Inline SVG glyphs.
//!
//! Icons are a closed set so that a typo in `content.toml` (`icon = "user"`)
//! fails at scan time instead of rendering an empty box. Each glyph is a
//! 24x24 stroke icon drawn with `currentColor`, so CSS controls its color.

use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Users,
    Video,
    PenTool,
    Target,
    Layout,
    Cpu,
    Zap,
    BarChart,
    Instagram,
    Mail,
    Phone,
    ArrowRight,
    CheckCircle,
    Menu,
    X,
    TrendingUp,
    ExternalLink,
}

impl Icon {
    fn body(self) -> &'static str {
        match self {
            Icon::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Icon::Video => {
                r#"<path d="m16 13 5.22 3.48a.5.5 0 0 0 .78-.42V7.87a.5.5 0 0 0-.75-.43L16 10.5"/><rect x="2" y="6" width="14" height="12" rx="2"/>"#
            }
            Icon::PenTool => {
                r#"<path d="m12 19 7-7 3 3-7 7-3-3z"/><path d="m18 13-1.5-7.5L2 2l3.5 14.5L13 18l5-5z"/><path d="m2 2 7.59 7.59"/><circle cx="11" cy="11" r="2"/>"#
            }
            Icon::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            Icon::Layout => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M3 9h18"/><path d="M9 21V9"/>"#
            }
            Icon::Cpu => {
                r#"<rect x="4" y="4" width="16" height="16" rx="2"/><rect x="9" y="9" width="6" height="6"/><path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"/>"#
            }
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Icon::BarChart => r#"<path d="M12 20V10"/><path d="M18 20V4"/><path d="M6 20v-4"/>"#,
            Icon::Instagram => {
                r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::CheckCircle => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Icon::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Icon::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            Icon::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
        }
    }

    /// Render the glyph at `size` pixels.
    pub fn svg(self, size: u32) -> Markup {
        html! {
            svg.icon xmlns="http://www.w3.org/2000/svg" width=(size) height=(size)
                viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
                (PreEscaped(self.body()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        icon: Icon,
    }

    #[test]
    fn icon_names_are_kebab_case() {
        let h: Holder = toml::from_str(r#"icon = "pen-tool""#).unwrap();
        assert_eq!(h.icon, Icon::PenTool);
        let h: Holder = toml::from_str(r#"icon = "bar-chart""#).unwrap();
        assert_eq!(h.icon, Icon::BarChart);
    }

    #[test]
    fn unknown_icon_rejected() {
        let result: Result<Holder, _> = toml::from_str(r#"icon = "user""#);
        assert!(result.is_err());
    }

    #[test]
    fn svg_uses_current_color_and_size() {
        let svg = Icon::Mail.svg(22).into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"stroke="currentColor""#));
        assert!(svg.contains(r#"width="22""#));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
    }
}
