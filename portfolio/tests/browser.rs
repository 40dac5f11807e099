//! Browser tests. Run with `wasm-pack test --headless --firefox portfolio`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use portfolio::config::PageConfig;
use portfolio::sections::PageState;
use portfolio::state::Section;
use portfolio::{App, install_window_listeners};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser")
}

/// Fresh element under `<body>` so mounts from different tests never share ids.
fn container() -> HtmlElement {
    let document = document();
    let el = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("document has a body")
        .append_child(&el)
        .expect("append container");
    el
}

fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("{selector} not found"))
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn dispatch_on_window(event: &Event) {
    web_sys::window()
        .expect("window")
        .dispatch_event(event)
        .expect("dispatch");
}

/// Lets timers and queued render effects run.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("set_timeout");
    });
    JsFuture::from(promise).await.expect("timer resolves");
}

fn type_into(root: &HtmlElement, name: &str, value: &str) {
    let element = find(root, &format!("[name='{name}']")).expect("form control");
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    element.dispatch_event(&event).expect("dispatch input");
}

fn control_value(root: &HtmlElement, name: &str) -> String {
    let element = find(root, &format!("[name='{name}']")).expect("form control");
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
            .unwrap_or_default()
    }
}

#[wasm_bindgen_test]
fn mounts_every_page_part() {
    let root = container();
    let mounted = leptos::mount::mount_to(root.clone(), || view! { <App/> });

    for section in Section::ALL {
        assert!(
            find(&root, &format!("#{}", section.id())).is_some(),
            "missing #{}",
            section.id()
        );
    }
    for id in ["skills-heading", "projects-heading"] {
        assert!(find(&root, &format!("#{id}")).is_some(), "missing #{id}");
    }

    let nav_buttons = root
        .query_selector_all(".nav-desktop button")
        .expect("valid selector");
    assert_eq!(nav_buttons.length(), 4);

    assert!(find(&root, "button[aria-label='Toggle menu']").is_some());
    // Mobile menu starts closed.
    assert!(find(&root, ".nav-mobile").is_none());

    let footer = find(&root, ".footer-copyright")
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    assert!(footer.contains("All rights reserved."));

    drop(mounted);
}

#[wasm_bindgen_test]
async fn desktop_resize_closes_open_mobile_menu() {
    // Breakpoint 0 makes any real viewport count as desktop.
    let config = PageConfig {
        mobile_breakpoint: 0.0,
        ..PageConfig::default()
    };
    let root = container();
    let mounted = leptos::mount::mount_to(root.clone(), move || {
        provide_context(config);
        view! { <App/> }
    });

    click(&root, "button[aria-label='Toggle menu']");
    sleep(20).await;
    assert!(find(&root, ".nav-mobile").is_some());

    dispatch_on_window(&Event::new("resize").expect("resize event"));
    sleep(20).await;
    assert!(find(&root, ".nav-mobile").is_none());

    drop(mounted);
    assert!(find(&root, ".nav").is_none());
}

#[wasm_bindgen_test]
fn window_listeners_stop_after_cleanup() {
    let config = PageConfig {
        mobile_breakpoint: 0.0,
        ..PageConfig::default()
    };
    let owner = Owner::new();
    let state = owner.with(PageState::new);
    let listeners = owner.with(Owner::new);
    listeners.with(|| install_window_listeners(state, config));

    let mousemove = |x: i32, y: i32| {
        let init = web_sys::MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        web_sys::MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
            .expect("mousemove event")
    };

    state.nav.update(|nav| nav.toggle_menu());
    dispatch_on_window(&Event::new("resize").expect("resize event"));
    assert!(!state.nav.get_untracked().menu_open);

    dispatch_on_window(&mousemove(40, 60));
    let cursor = state.cursor.get_untracked();
    assert_eq!((cursor.x, cursor.y), (40.0, 60.0));

    listeners.cleanup();

    state.nav.update(|nav| nav.toggle_menu());
    dispatch_on_window(&Event::new("resize").expect("resize event"));
    assert!(state.nav.get_untracked().menu_open);

    dispatch_on_window(&mousemove(400, 600));
    let cursor = state.cursor.get_untracked();
    assert_eq!((cursor.x, cursor.y), (40.0, 60.0));
}

#[wasm_bindgen_test]
async fn submit_shows_sending_then_thanks_and_clears() {
    let config = PageConfig {
        submit_delay: Duration::from_millis(300),
        ..PageConfig::default()
    };
    let root = container();
    let mounted = leptos::mount::mount_to(root.clone(), move || {
        provide_context(config);
        view! { <App/> }
    });

    type_into(&root, "name", "Abebe");
    type_into(&root, "email", "abebe@example.com");
    type_into(&root, "message", "Let's build something.");

    click(&root, "button[type='submit']");
    sleep(30).await;

    let button = find(&root, "button[type='submit']").expect("submit button");
    assert!(button.has_attribute("disabled"));
    assert!(button.text_content().unwrap_or_default().contains("Sending..."));
    assert!(find(&root, ".form-status").is_none());
    assert_eq!(control_value(&root, "name"), "Abebe");

    sleep(500).await;

    let status = find(&root, ".form-status.success")
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    assert!(status.contains("Thank you"));
    for name in ["name", "email", "message"] {
        assert_eq!(control_value(&root, name), "", "{name} not cleared");
    }
    let button = find(&root, "button[type='submit']").expect("submit button");
    assert!(!button.has_attribute("disabled"));
    assert!(button.text_content().unwrap_or_default().contains("Send Message"));

    drop(mounted);
}
