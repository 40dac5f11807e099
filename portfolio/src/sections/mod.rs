// Page sections
// Developed with 💀 by Fira web. (c)2025

use leptos::prelude::*;

use crate::dom;
use crate::state::{CursorState, NavigationState, Section};

mod about;
mod contact;
mod cursor;
mod footer;
mod hero;
mod nav;
mod projects;
mod services;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use cursor::CursorGlow;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use services::Services;
pub use skills::Skills;

/// Signals shared by every section.
#[derive(Clone, Copy)]
pub struct PageState {
    pub nav: RwSignal<NavigationState>,
    pub cursor: RwSignal<CursorState>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavigationState::default()),
            cursor: RwSignal::new(CursorState::default()),
        }
    }

    /// Activates `section`, closes the mobile menu and scrolls there.
    pub fn navigate(self, section: Section) {
        self.nav.update(|nav| nav.navigate_to(section));
        dom::scroll_into_view(section);
    }

    pub fn hover(self, hovering: bool) {
        self.cursor.update(|cursor| cursor.set_hovering(hovering));
    }

    pub fn is_active(self, section: Section) -> bool {
        self.nav.with(|nav| nav.is_active(section))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
fn SectionHeading(id: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 id=id class="section-title">
            {title}
            <span class="section-title-bar"></span>
        </h2>
    }
}
