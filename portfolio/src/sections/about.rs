use leptos::prelude::*;

use super::SectionHeading;
use crate::content::HIGHLIGHTS;
use crate::state::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="about" aria-labelledby="about-heading">
            <div class="container">
                <SectionHeading id="about-heading" title="About Me" />
                <div class="about-grid">
                    <div class="card about-bio">
                        <p>
                            "I'm a passionate developer with "
                            <span class="accent-blue">"1+ years"</span>
                            " of experience building Front-end web applications. I specialize in "
                            "creating responsive, user-friendly interfaces with "
                            <span class="accent-cyan">"React"</span>
                            " and "
                            <span class="accent-sky">"Next.js"</span>
                            "."
                        </p>
                        <p>
                            "Throughout my career, I have had the privilege of collaborating with "
                            "prestigious organizations, contributing to their success and growth."
                        </p>
                    </div>
                    <div class="about-highlights">
                        {HIGHLIGHTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="card highlight">
                                        <div class="highlight-icon">{item.icon}</div>
                                        <div>
                                            <h3 class="highlight-title">{item.title}</h3>
                                            <p class="highlight-content">{item.content}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
