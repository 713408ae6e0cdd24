//! Client-side UI state, modeled as plain state machines.
//!
//! The generated page has exactly three pieces of dynamic behavior, all
//! driven by the inline `static/site.js`:
//!
//! - the nav turns opaque once the page scrolls past a threshold,
//! - the mobile menu opens and closes,
//! - content blocks reveal once, the first time they enter the viewport.
//!
//! The types here are the source of truth for those rules. The renderer uses
//! them to produce the initial markup (and the `data-*` attributes the script
//! reads), and the script applies the same transitions in the browser.

/// A named in-page anchor in the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation targets, in display order. Desktop and mobile menus both
/// render exactly this list.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Results", href: "#results" },
    NavLink { label: "Pricing", href: "#pricing" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Anchor the call-to-action links point at.
pub const CTA_HREF: &str = "#contact";

/// The nav shell's two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute `scrolled` for a vertical offset. Strictly greater than the
    /// threshold counts as scrolled.
    pub fn on_scroll(&mut self, offset: f64, threshold: u32) {
        self.scrolled = offset > f64::from(threshold);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any menu link closes the menu.
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }

    /// Class applied to the `<nav>` element for the current scroll flag.
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "site-nav is-scrolled"
        } else {
            "site-nav"
        }
    }
}

/// A scroll listener bound to a [`NavState`].
///
/// Mirrors the script's lifecycle: events only reach the state between
/// [`subscribe`](Self::subscribe) and [`unsubscribe`](Self::unsubscribe).
/// Page transitions follow the back/forward cache: a persisted hide keeps
/// the listener, a persisted show brings a torn-down one back.
#[derive(Debug)]
pub struct ScrollSubscription {
    threshold: u32,
    active: bool,
}

impl ScrollSubscription {
    pub fn subscribe(threshold: u32) -> Self {
        Self {
            threshold,
            active: true,
        }
    }

    /// Deliver a scroll event. Returns whether the state was touched.
    pub fn deliver(&self, state: &mut NavState, offset: f64) -> bool {
        if !self.active {
            return false;
        }
        state.on_scroll(offset, self.threshold);
        true
    }

    pub fn unsubscribe(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `pagehide`: tear down only when the page is really going away.
    pub fn page_hidden(&mut self, persisted: bool) {
        if !persisted {
            self.unsubscribe();
        }
    }

    /// `pageshow`: a page restored from the cache listens again.
    pub fn page_shown(&mut self, persisted: bool) {
        if persisted {
            self.active = true;
        }
    }
}

/// One-shot reveal flag for a block that animates in on scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Unseen,
    Seen,
}

impl Reveal {
    /// Initial state for a block: unseen when reveal animations are on,
    /// already seen when they are off.
    pub fn initial(enabled: bool) -> Self {
        if enabled { Reveal::Unseen } else { Reveal::Seen }
    }

    /// Feed a visibility observation. `Seen` is terminal.
    pub fn observe(self, visible: bool) -> Self {
        match self {
            Reveal::Unseen if visible => Reveal::Seen,
            other => other,
        }
    }

    /// Value of the block's `data-reveal` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Reveal::Unseen => "unseen",
            Reveal::Seen => "seen",
        }
    }
}

/// Per-block reveal settings handed to the section renderers.
#[derive(Debug, Clone, Copy)]
pub struct RevealPlan {
    pub enabled: bool,
    pub stagger_ms: u32,
}

impl RevealPlan {
    pub fn from_config(config: &crate::config::RevealConfig) -> Self {
        Self {
            enabled: config.enabled,
            stagger_ms: config.stagger_ms,
        }
    }

    pub fn initial(&self) -> Reveal {
        Reveal::initial(self.enabled)
    }

    /// Inline style carrying the stagger delay for the item at `index`.
    pub fn delay_style(&self, index: usize) -> Option<String> {
        if !self.enabled || index == 0 {
            return None;
        }
        Some(format!(
            "--reveal-delay: {}ms;",
            self.stagger_ms as usize * index
        ))
    }
}
