use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::{PageState, SectionHeading};
use crate::config::use_page_config;
use crate::content::{ContactLink, AVAILABILITY, PROFILE};
use crate::state::{
    ContactField, ContactFormState, ContactSink, Section, SimulatedSink, SubmitOutcome,
};

#[component]
pub fn Contact(state: PageState) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="contact" aria-labelledby="contact-heading">
            <div class="container">
                <SectionHeading id="contact-heading" title="Get In Touch" />
                <div class="contact-grid">
                    <div class="contact-aside">
                        <div class="card contact-info">
                            <h3 class="card-title">"Contact Information"</h3>
                            <div class="contact-links">
                                {PROFILE
                                    .contact_links()
                                    .into_iter()
                                    .map(|link| view! { <ContactRow link=link state=state /> })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="card availability">
                            <h3 class="card-title">"Availability"</h3>
                            <p>{AVAILABILITY}</p>
                            <div class="availability-status">
                                <span class="availability-dot"></span>
                                <span>"Available for work"</span>
                            </div>
                        </div>
                    </div>
                    <ContactForm state=state />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(link: ContactLink, state: PageState) -> impl IntoView {
    let body = view! {
        <div class="contact-icon">{link.icon}</div>
        <div>
            <p class="contact-label">{link.label}</p>
            <p class="contact-value">{link.value}</p>
        </div>
    };

    match link.href {
        Some(href) => {
            let (target, rel) = if link.external {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            view! {
                <a
                    href=href
                    target=target
                    rel=rel
                    class="contact-row contact-row--link"
                    aria-label=link.aria_label
                    on:mouseenter=move |_| state.hover(true)
                    on:mouseleave=move |_| state.hover(false)
                >
                    {body}
                </a>
            }
            .into_any()
        }
        None => view! { <div class="contact-row">{body}</div> }.into_any(),
    }
}

#[component]
fn ContactForm(state: PageState) -> impl IntoView {
    let config = use_page_config();
    let contact = RwSignal::new(ContactFormState::default());

    // Routed by the control's `name` attribute.
    let on_input = move |ev: Event| {
        let Some(name) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.get_attribute("name"))
        else {
            return;
        };
        match name.parse::<ContactField>() {
            Ok(field) => {
                let value = event_target_value(&ev);
                contact.update(|s| s.handle_change(field, value));
            }
            Err(err) => tracing::warn!(%err, "ignoring input"),
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match contact.try_update(ContactFormState::begin_submit) {
            Some(Ok(snapshot)) => {
                set_timeout(
                    move || {
                        let result = SimulatedSink.deliver(&snapshot);
                        contact.try_update(|s| s.finish_submit(result));
                    },
                    config.submit_delay,
                );
            }
            Some(Err(err)) => tracing::debug!(%err, "submit refused"),
            None => {}
        }
    };

    let value_of = move |field: ContactField| contact.with(|s| s.form.get(field).to_string());
    let submitting = move || contact.with(ContactFormState::is_submitting);

    view! {
        <div class="card contact-form-card">
            <h3 class="card-title">"Send Me a Message"</h3>
            <form class="contact-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="name">"Your Name"</label>
                    <input
                        type="text"
                        id="name"
                        name=ContactField::Name.as_str()
                        required=true
                        placeholder=PROFILE.name
                        prop:value=move || value_of(ContactField::Name)
                        on:input=on_input
                    />
                </div>
                <div class="form-field">
                    <label for="email">"Email Address"</label>
                    <input
                        type="email"
                        id="email"
                        name=ContactField::Email.as_str()
                        required=true
                        placeholder="Fira@example.com"
                        prop:value=move || value_of(ContactField::Email)
                        on:input=on_input
                    />
                </div>
                <div class="form-field">
                    <label for="message">"Your Message"</label>
                    <textarea
                        id="message"
                        name=ContactField::Message.as_str()
                        required=true
                        rows="5"
                        placeholder="Hello Firaol, I'd like to talk about..."
                        prop:value=move || value_of(ContactField::Message)
                        on:input=on_input
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="btn btn-submit"
                    disabled=submitting
                    on:mouseenter=move |_| state.hover(true)
                    on:mouseleave=move |_| state.hover(false)
                    aria-label="Submit contact form"
                >
                    <Show when=submitting fallback=|| "Send Message">
                        <span class="btn-spinner" aria-hidden="true"></span>
                        "Sending..."
                    </Show>
                </button>

                {move || {
                    contact.with(|s| {
                        let class = match s.status.outcome()? {
                            SubmitOutcome::Success => "form-status success",
                            SubmitOutcome::Failure => "form-status failure",
                        };
                        let message = s.status.submit_message.clone()?;
                        Some(view! { <p class=class role="status">{message}</p> })
                    })
                }}
            </form>
        </div>
    }
}
