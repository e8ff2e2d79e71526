//! Document-level dark theme marker.
//!
//! Applies the `dark` class to the `<html>` element; the stylesheet switches
//! palettes on `.dark`. The navigation controller is the only writer. The
//! choice is not persisted, so every page load starts light.
//!
//! TRADE-OFFS
//! ==========
//! Class mutation is browser-only; SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::nav::ThemeMarker;

/// Class toggled on the root element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Theme marker backed by the `<html>` element's class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeMarker;

impl ThemeMarker for DocumentThemeMarker {
    fn set_dark(&mut self, dark: bool) {
        apply(dark);
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        if let Err(err) = result {
            log::warn!("failed to update theme class: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("no document; theme marker dark={enabled} not applied");
    }
}
