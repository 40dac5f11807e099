use leptos::prelude::*;

use super::PageState;
use crate::content::PROFILE;
use crate::state::Section;

#[component]
pub fn Nav(state: PageState) -> impl IntoView {
    let menu_open = move || state.nav.with(|nav| nav.menu_open);

    view! {
        <header class="nav">
            <div class="nav-inner">
                <span class="nav-brand">{PROFILE.brand}</span>

                <nav class="nav-desktop">
                    <ul class="nav-links">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <button
                                            class=move || if state.is_active(section) { "nav-link active" } else { "nav-link" }
                                            on:click=move |_| state.navigate(section)
                                            on:mouseenter=move |_| state.hover(true)
                                            on:mouseleave=move |_| state.hover(false)
                                            aria-label=format!("Go to {} section", section.id())
                                        >
                                            {section.label()}
                                            <span class="nav-link-underline"></span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <button
                    class="nav-menu-btn"
                    on:click=move |_| state.nav.update(|nav| nav.toggle_menu())
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                >
                    <svg class="nav-menu-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || if menu_open() { "M6 18L18 6M6 6l12 12" } else { "M4 6h16M4 12h16M4 18h16" }
                        />
                    </svg>
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav-mobile">
                    <ul class="nav-mobile-links">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <button
                                            class=move || if state.is_active(section) { "nav-mobile-link active" } else { "nav-mobile-link" }
                                            on:click=move |_| state.navigate(section)
                                            aria-label=format!("Go to {} section", section.id())
                                        >
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </header>
    }
}
