use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{Project, PROJECTS};

/// Not a nav target: no section id.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="projects" aria-labelledby="projects-heading">
            <div class="container">
                <SectionHeading id="projects-heading" title="My Latest Work" />
                <div class="projects-grid">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="card project-card">
            <div class="project-image">
                <div class="project-image-shade"></div>
                <img src=project.image alt=project.title loading="lazy" />
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
