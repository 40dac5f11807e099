use leptos::prelude::*;

use crate::content::PROFILE;
use crate::dom;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", dom::current_year(), PROFILE.name);

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">{PROFILE.brand}</div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
