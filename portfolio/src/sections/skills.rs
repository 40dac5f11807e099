use leptos::prelude::*;

use super::SectionHeading;
use crate::content::SKILLS;

/// Not a nav target: no section id.
#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="skills" aria-labelledby="skills-heading">
            <div class="container">
                <SectionHeading id="skills-heading" title="My Toolkit" />
                <div class="skills-grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill" title=format!("{}%", skill.level)>
                                    <span class="skill-name">{skill.name}</span>
                                    <div class="skill-bar">
                                        <div class="skill-bar-fill" style=format!("width: {}%;", skill.level.min(100))></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
