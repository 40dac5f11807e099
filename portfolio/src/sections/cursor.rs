use leptos::prelude::*;

use super::PageState;

/// Soft glow trailing the pointer; grows over links and buttons.
#[component]
pub fn CursorGlow(state: PageState) -> impl IntoView {
    view! {
        <div
            class=move || if state.cursor.with(|c| c.hovering_link) { "cursor-glow hovering" } else { "cursor-glow" }
            style=move || state.cursor.with(|c| format!("transform: translate3d({}px, {}px, 0);", c.x, c.y))
            aria-hidden="true"
        ></div>
    }
}
