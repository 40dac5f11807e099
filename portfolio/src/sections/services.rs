use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{Service, SERVICES};
use crate::state::Section;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="services" aria-labelledby="services-heading">
            <div class="container">
                <SectionHeading id="services-heading" title="My Services" />
                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <div class=format!("card service-card service-card--{}", service.accent)>
            <div class="service-card-glow"></div>
            <div class="service-card-body">
                <div class="service-icon">{service.icon}</div>
                <h3 class="service-title">{service.title}</h3>
                <p class="service-description">{service.description}</p>
            </div>
        </div>
    }
}
