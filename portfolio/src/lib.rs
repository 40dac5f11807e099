// Fira web. portfolio library
// Developed with 💀 by Fira web. (c)2025

//! # portfolio
//!
//! Single page portfolio for Firaol Mengistu, rendered client side with
//! [Leptos](https://leptos.dev/) and bundled by Trunk.
//!
//! The page is static content plus a little view state:
//!
//! - [`state`] - scroll tracking, nav/menu, contact form and cursor state,
//!   free of any DOM access
//! - [`sections`] - Leptos components, one per page section
//! - [`content`] - hard-coded copy (profile, services, skills, projects)
//! - [`config`] - tunables shared through the Leptos context
//! - [`dom`] - the handful of `web_sys` reads and scrolls the page needs
//! - [`logging`] - `tracing` to the browser console
//!
//! The contact form does not reach any backend: submissions are delivered
//! to [`state::SimulatedSink`] after a fixed delay.

pub mod config;
pub mod content;
pub mod dom;
pub mod logging;
pub mod sections;
pub mod state;

use leptos::ev;
use leptos::prelude::*;

use config::PageConfig;
use sections::*;

/// Root component.
///
/// Uses the [`PageConfig`] provided by an ancestor, if any, and passes it on.
#[component]
pub fn App() -> impl IntoView {
    let config = config::use_page_config();
    provide_context(config);

    let state = PageState::new();
    install_window_listeners(state, config);

    view! {
        <div class="page">
            <div class="page-backdrop" aria-hidden="true"></div>
            <CursorGlow state=state />
            <Nav state=state />
            <main>
                <Hero state=state />
                <About />
                <Services />
                <Skills />
                <Projects />
                <Contact state=state />
            </main>
            <Footer />
        </div>
    }
}

/// Registers the window `scroll`, `mousemove` and `resize` listeners that
/// drive `state`. They are removed when the current owner is cleaned up.
pub fn install_window_listeners(state: PageState, config: PageConfig) {
    let scroll = window_event_listener(ev::scroll, move |_| {
        if let Some(y) = dom::scroll_y() {
            state
                .nav
                .maybe_update(|nav| nav.on_scroll(y, config.probe_offset, dom::section_bounds));
        }
    });
    let mousemove = window_event_listener(ev::mousemove, move |e| {
        state
            .cursor
            .update(|cursor| cursor.move_to(f64::from(e.client_x()), f64::from(e.client_y())));
    });
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = dom::viewport_width() {
            state
                .nav
                .maybe_update(|nav| nav.on_resize(width, config.mobile_breakpoint));
        }
    });
    on_cleanup(move || {
        scroll.remove();
        mousemove.remove();
        resize.remove();
    });
}
