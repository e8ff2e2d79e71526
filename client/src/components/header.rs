//! Fixed navigation header with theme toggle and collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns the page's only interactive state. A
//! `NavigationController` lives in a component-scoped signal; the window
//! scroll listener is attached on hydrate and detached in `on_cleanup`, so a
//! remount starts fresh (unscrolled, light, menu closed).

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::content::sections::SectionId;
use crate::state::nav::{MenuState, NavigationController, Theme};
use crate::util::scroll::DocumentSections;
use crate::util::theme::DocumentThemeMarker;

pub const BRAND: &str = "TuitionPro";
pub const TAGLINE: &str = "Personal Attention. Proven Results.";

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavigationController::new(DocumentThemeMarker));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{ScrollSubscription, WindowScroll};

        let subscription = ScrollSubscription::attach(
            &WindowScroll,
            Box::new(move |offset: f64| nav.update(|n| n.on_scroll_signal(offset))),
        );
        on_cleanup(move || drop(subscription));
    }

    let scrolled = move || nav.with(NavigationController::scrolled);
    let theme = move || nav.with(NavigationController::theme);
    let menu = move || nav.with(NavigationController::menu);

    let on_theme = move |_| nav.update(NavigationController::toggle_theme);
    let on_menu = move |_| nav.update(NavigationController::toggle_mobile_menu);
    let go_to = move |section: SectionId| {
        nav.update(|n| n.navigate_to_section(section.as_str(), &DocumentSections));
    };

    view! {
        <header class=move || header_class(scrolled())>
            <div class="header__inner">
                <div class="header__bar">
                    <div class="header__brand">
                        <span class="header__logo" aria-hidden="true">"\u{1F4D6}"</span>
                        <span class="header__name">{BRAND}</span>
                        <span class="header__tagline">{TAGLINE}</span>
                    </div>

                    <nav class="header__nav">
                        {nav_buttons("header__link", go_to)}
                    </nav>

                    <div class="header__controls">
                        <button
                            class="header__icon-button"
                            on:click=on_theme
                            title=move || theme_button_title(theme())
                        >
                            {move || theme_icon(theme())}
                        </button>
                        <button
                            class="header__icon-button header__menu-button"
                            on:click=on_menu
                            title=move || menu_button_title(menu())
                        >
                            {move || menu_icon(menu())}
                        </button>
                    </div>
                </div>

                <Show when=move || menu().is_open()>
                    <div class="header__mobile">
                        <nav class="header__mobile-nav">
                            {nav_buttons("header__mobile-link", go_to)}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// One button per section, in header order.
fn nav_buttons<F>(class: &'static str, go_to: F) -> impl IntoView
where
    F: Fn(SectionId) + Copy + Send + Sync + 'static,
{
    SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class=class on:click=move |_| go_to(section)>
                    {section.nav_label()}
                </button>
            }
        })
        .collect_view()
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "header header--scrolled" } else { "header" }
}

/// Sun while dark (click for light), moon while light.
fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    }
}

fn theme_button_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    }
}

fn menu_icon(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Open => "\u{2715}",
        MenuState::Closed => "\u{2630}",
    }
}

fn menu_button_title(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Open => "Close menu",
        MenuState::Closed => "Open menu",
    }
}
