// View state for the portfolio page
// Developed with 💀 by Fira web. (c)2025

//! Plain Rust state machines behind the page.
//!
//! Nothing in here touches the DOM, so every transition is testable natively.
//! The Leptos components in [`crate::sections`] hold these types in signals
//! and feed them browser events.

pub mod contact;
pub mod cursor;
pub mod nav;
pub mod section;

pub use contact::{
    ContactField, ContactForm, ContactFormState, ContactSink, SimulatedSink, SubmissionStatus,
    SubmitError, SubmitOutcome,
};
pub use cursor::CursorState;
pub use nav::NavigationState;
pub use section::{probe_active_section, Section, SectionBounds};
