//! Thin wrappers over `web_sys` for the few DOM reads the page needs.
//!
//! Every lookup degrades to `None` (or does nothing) when the window or the
//! element is missing.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::state::{Section, SectionBounds};

fn section_element(section: Section) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// `offsetTop` / `offsetHeight` of the section element.
pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let element = section_element(section)?;
    Some(SectionBounds::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Smooth-scrolls the section to the top of the viewport.
pub fn scroll_into_view(section: Section) {
    if let Some(element) = section_element(section) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        tracing::warn!(%section, "section element not found, skipping scroll");
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
