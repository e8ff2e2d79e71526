//! Navigation header interaction state.
//!
//! DESIGN
//! ======
//! `NavigationController` owns the three header flags (scrolled, theme, mobile
//! menu) and performs each transition inline together with its side effect.
//! Browser concerns stay behind two seams: `ThemeMarker` for the document-level
//! dark flag and `SectionScroller` for lookup + smooth scroll. Both have
//! browser implementations in `util` and in-memory fakes in tests.
//!
//! INVARIANTS
//! ==========
//! - `scrolled` always equals `offset > SCROLL_THRESHOLD_PX` for the last
//!   delivered offset.
//! - The theme marker is written only by this controller and always mirrors
//!   `theme == Theme::Dark`.
//! - Every navigation attempt leaves the mobile menu closed.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset, in CSS pixels, past which the header counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Global light/dark visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Visibility of the collapsible mobile navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Document-level flag read by the stylesheet to pick the dark palette.
pub trait ThemeMarker {
    /// Set (`true`) or clear (`false`) the dark marker.
    fn set_dark(&mut self, dark: bool);
}

/// Host capability that brings a named page section into view.
pub trait SectionScroller {
    /// Smooth-scroll to the element with id `section_id`.
    ///
    /// Returns `false` when no such element exists; nothing is scrolled then.
    fn scroll_to(&self, section_id: &str) -> bool;
}

/// Snapshot of the header flags, suitable for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub theme: Theme,
    pub menu: MenuState,
}

/// Owner of the header state machine and the theme marker it drives.
#[derive(Debug)]
pub struct NavigationController<M> {
    state: NavState,
    marker: M,
}

impl<M: ThemeMarker> NavigationController<M> {
    /// Mount a controller in its initial state (not scrolled, light, closed).
    ///
    /// The marker is cleared so a remount never inherits a stale dark flag.
    pub fn new(mut marker: M) -> Self {
        marker.set_dark(false);
        Self { state: NavState::default(), marker }
    }

    /// Apply one viewport scroll sample.
    pub fn on_scroll_signal(&mut self, offset: f64) {
        self.state.scrolled = is_past_threshold(offset);
    }

    /// Flip between light and dark, keeping the marker in lockstep.
    pub fn toggle_theme(&mut self) {
        let next = self.state.theme.toggled();
        self.marker.set_dark(next.is_dark());
        self.state.theme = next;
        log::debug!("theme -> {next:?}");
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.menu = self.state.menu.toggled();
    }

    /// Scroll to `section_id` when it exists, then close the mobile menu.
    ///
    /// The menu closes whether or not the section was found. A missing
    /// section is a content/markup mismatch and is ignored silently.
    pub fn navigate_to_section(&mut self, section_id: &str, scroller: &impl SectionScroller) {
        scroller.scroll_to(section_id);
        self.state.menu = MenuState::Closed;
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    #[must_use]
    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.state.menu
    }

    #[must_use]
    pub fn marker(&self) -> &M {
        &self.marker
    }
}

/// `true` when `offset` lies strictly beyond the scroll threshold.
///
/// NaN never counts as scrolled.
#[must_use]
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}
