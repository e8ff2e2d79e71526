use std::cell::RefCell;

use super::*;

// =============================================================
// Fakes
// =============================================================

/// Records every marker write so tests can compare against `theme`.
#[derive(Debug, Default)]
struct RecordingMarker {
    dark: bool,
    writes: Vec<bool>,
}

impl ThemeMarker for RecordingMarker {
    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        self.writes.push(dark);
    }
}

/// Page with a fixed set of section ids; records successful scrolls.
struct FakePage {
    sections: &'static [&'static str],
    scrolled_to: RefCell<Vec<String>>,
}

impl FakePage {
    fn with_sections(sections: &'static [&'static str]) -> Self {
        Self { sections, scrolled_to: RefCell::new(Vec::new()) }
    }
}

impl SectionScroller for FakePage {
    fn scroll_to(&self, section_id: &str) -> bool {
        if self.sections.iter().any(|s| *s == section_id) {
            self.scrolled_to.borrow_mut().push(section_id.to_owned());
            true
        } else {
            false
        }
    }
}

const ALL_SECTIONS: &[&str] = &["about", "parents", "why-choose", "subjects", "reviews", "contact"];

fn mount() -> NavigationController<RecordingMarker> {
    NavigationController::new(RecordingMarker::default())
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn mount_starts_unscrolled_light_closed() {
    let nav = mount();
    assert_eq!(
        nav.state(),
        NavState { scrolled: false, theme: Theme::Light, menu: MenuState::Closed }
    );
}

#[test]
fn mount_clears_stale_marker() {
    let nav = NavigationController::new(RecordingMarker { dark: true, writes: Vec::new() });
    assert!(!nav.marker().dark);
    assert_eq!(nav.marker().writes, vec![false]);
}

#[test]
fn enum_defaults_match_initial_state() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(MenuState::default(), MenuState::Closed);
}

// =============================================================
// Scroll signal
// =============================================================

#[test]
fn scrolled_tracks_threshold_for_each_offset() {
    let mut nav = mount();
    let cases = [
        (0.0, false),
        (49.9, false),
        (50.0, false),
        (50.5, true),
        (51.0, true),
        (2_000.0, true),
        (-10.0, false),
    ];
    for (offset, expected) in cases {
        nav.on_scroll_signal(offset);
        assert_eq!(nav.scrolled(), expected, "offset {offset}");
    }
}

#[test]
fn scrolled_is_independent_of_prior_state() {
    let mut nav = mount();
    nav.on_scroll_signal(300.0);
    nav.on_scroll_signal(20.0);
    assert!(!nav.scrolled());

    nav.on_scroll_signal(20.0);
    nav.on_scroll_signal(300.0);
    assert!(nav.scrolled());
}

#[test]
fn repeated_scroll_signal_is_idempotent() {
    let mut nav = mount();
    nav.on_scroll_signal(75.0);
    let once = nav.state();
    nav.on_scroll_signal(75.0);
    nav.on_scroll_signal(90.0);
    assert_eq!(nav.state(), once);
}

#[test]
fn nan_offset_is_not_scrolled() {
    let mut nav = mount();
    nav.on_scroll_signal(100.0);
    nav.on_scroll_signal(f64::NAN);
    assert!(!nav.scrolled());
}

#[test]
fn scroll_signal_leaves_theme_and_menu_alone() {
    let mut nav = mount();
    nav.toggle_theme();
    nav.toggle_mobile_menu();
    nav.on_scroll_signal(80.0);
    assert_eq!(nav.theme(), Theme::Dark);
    assert_eq!(nav.menu(), MenuState::Open);
}

#[test]
fn scenario_scroll_down_then_back_up() {
    let mut nav = mount();
    nav.on_scroll_signal(80.0);
    assert!(nav.scrolled());
    nav.on_scroll_signal(10.0);
    assert!(!nav.scrolled());
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_theme_is_an_involution() {
    for start_dark in [false, true] {
        let mut nav = mount();
        if start_dark {
            nav.toggle_theme();
        }
        let before = nav.theme();
        nav.toggle_theme();
        nav.toggle_theme();
        assert_eq!(nav.theme(), before);
    }
}

#[test]
fn marker_mirrors_theme_after_every_toggle() {
    let mut nav = mount();
    for _ in 0..5 {
        nav.toggle_theme();
        assert_eq!(nav.marker().dark, nav.theme() == Theme::Dark);
    }
}

#[test]
fn only_theme_toggles_write_the_marker() {
    let mut nav = mount();
    nav.on_scroll_signal(99.0);
    nav.toggle_mobile_menu();
    nav.navigate_to_section("about", &FakePage::with_sections(ALL_SECTIONS));
    assert_eq!(nav.marker().writes, vec![false]);

    nav.toggle_theme();
    assert_eq!(nav.marker().writes, vec![false, true]);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_is_an_involution() {
    let mut nav = mount();
    nav.toggle_mobile_menu();
    assert_eq!(nav.menu(), MenuState::Open);
    nav.toggle_mobile_menu();
    assert_eq!(nav.menu(), MenuState::Closed);
}

#[test]
fn toggle_mobile_menu_does_not_touch_theme() {
    let mut nav = mount();
    nav.toggle_mobile_menu();
    assert_eq!(nav.theme(), Theme::Light);
    assert!(!nav.marker().dark);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_always_closes_menu() {
    let page = FakePage::with_sections(ALL_SECTIONS);
    for target in ["about", "contact", "nowhere", ""] {
        for open_first in [false, true] {
            let mut nav = mount();
            if open_first {
                nav.toggle_mobile_menu();
            }
            nav.navigate_to_section(target, &page);
            assert_eq!(nav.menu(), MenuState::Closed, "target {target:?} open_first {open_first}");
        }
    }
}

#[test]
fn navigate_scrolls_to_known_section() {
    let page = FakePage::with_sections(ALL_SECTIONS);
    let mut nav = mount();
    nav.navigate_to_section("subjects", &page);
    assert_eq!(*page.scrolled_to.borrow(), vec!["subjects".to_owned()]);
}

#[test]
fn scenario_theme_menu_then_navigate() {
    let page = FakePage::with_sections(ALL_SECTIONS);
    let mut nav = mount();
    assert_eq!(nav.theme(), Theme::Light);
    assert_eq!(nav.menu(), MenuState::Closed);

    nav.toggle_theme();
    assert_eq!(nav.theme(), Theme::Dark);
    assert!(nav.marker().dark);

    nav.toggle_mobile_menu();
    assert_eq!(nav.menu(), MenuState::Open);

    nav.navigate_to_section("contact", &page);
    assert_eq!(nav.menu(), MenuState::Closed);
    assert_eq!(nav.theme(), Theme::Dark);
    assert!(nav.marker().dark);
    assert_eq!(*page.scrolled_to.borrow(), vec!["contact".to_owned()]);
}

#[test]
fn scenario_unknown_section_closes_menu_without_scrolling() {
    let page = FakePage::with_sections(ALL_SECTIONS);
    let mut nav = mount();
    nav.toggle_mobile_menu();

    nav.navigate_to_section("nonexistent-id", &page);
    assert_eq!(nav.menu(), MenuState::Closed);
    assert!(page.scrolled_to.borrow().is_empty());
}

#[test]
fn navigate_on_page_missing_section_still_closes_menu() {
    let page = FakePage::with_sections(&["subjects"]);
    let mut nav = mount();
    nav.toggle_mobile_menu();
    nav.navigate_to_section("reviews", &page);
    assert_eq!(nav.menu(), MenuState::Closed);
    assert!(page.scrolled_to.borrow().is_empty());
}
