use leptos::prelude::*;

use super::PageState;
use crate::content::PROFILE;
use crate::state::Section;

#[component]
pub fn Hero(state: PageState) -> impl IntoView {
    let greeting = format!("Hi! I'm {}", PROFILE.name);

    view! {
        <section id=Section::Home.id() class="hero" aria-labelledby="home-heading">
            <div class="container hero-inner">
                <div class="hero-avatar">
                    <img src=PROFILE.avatar alt=PROFILE.name />
                    <div class="hero-avatar-overlay">
                        <span>"That's me!"</span>
                    </div>
                </div>

                <h1 id="home-heading" class="hero-title">{greeting}</h1>

                <p class="hero-tagline">
                    <span class="hero-tagline-icon">"👨‍💻"</span>
                    {PROFILE.tagline}
                </p>

                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| state.navigate(Section::Contact)
                        on:mouseenter=move |_| state.hover(true)
                        on:mouseleave=move |_| state.hover(false)
                        aria-label="Contact me"
                    >
                        "Contact Me"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| state.navigate(Section::Services)
                        on:mouseenter=move |_| state.hover(true)
                        on:mouseleave=move |_| state.hover(false)
                        aria-label="View my services"
                    >
                        "My Services"
                    </button>
                </div>
            </div>
        </section>
    }
}
