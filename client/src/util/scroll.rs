//! Viewport scroll subscription and section scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header listens to window scroll events for its whole mount lifetime.
//! `ScrollSubscription` is the scope guard for that listener: it detaches on
//! `teardown` or on drop, whichever comes first, so an unmounted header can
//! never be driven by a stale callback. Browser bindings exist only under the
//! `hydrate` feature; SSR renders without a viewport.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::nav::SectionScroller;

/// Callback invoked with the current vertical scroll offset.
pub type ScrollCallback = Box<dyn Fn(f64) + 'static>;

/// Registration handle for a scroll listener.
pub trait ListenerHandle {
    /// Detach the listener. Called exactly once.
    fn release(self);
}

/// Source of viewport scroll notifications.
pub trait ScrollSource {
    type Handle: ListenerHandle;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Self::Handle;
}

/// Scope guard over one scroll listener registration.
pub struct ScrollSubscription<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> ScrollSubscription<H> {
    /// Register `on_scroll` with `source` for the lifetime of the guard.
    pub fn attach<S>(source: &S, on_scroll: ScrollCallback) -> Self
    where
        S: ScrollSource<Handle = H>,
    {
        Self { handle: Some(source.subscribe(on_scroll)) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Detach now. Later calls and the eventual drop are no-ops.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl<H: ListenerHandle> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// BROWSER BINDINGS
// =============================================================================

/// The browser window as a scroll source.
#[cfg(feature = "hydrate")]
pub struct WindowScroll;

#[cfg(feature = "hydrate")]
impl ListenerHandle for leptos::prelude::WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

#[cfg(feature = "hydrate")]
impl ScrollSource for WindowScroll {
    type Handle = leptos::prelude::WindowListenerHandle;

    fn subscribe(&self, on_scroll: ScrollCallback) -> Self::Handle {
        leptos::prelude::window_event_listener(leptos::ev::scroll, move |_| {
            on_scroll(current_scroll_offset());
        })
    }
}

/// Current vertical scroll offset of the window, `0.0` outside a browser.
pub fn current_scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Section lookup through `document.getElementById` with smooth scrolling.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSections;

impl SectionScroller for DocumentSections {
    fn scroll_to(&self, section_id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(section_id))
            else {
                return false;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("no document; skipping scroll to #{section_id}");
            false
        }
    }
}
