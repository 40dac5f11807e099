// Fira web. portfolio - Leptos 0.8 CSR
// Developed with 💀 by Fira web. (c)2025

use leptos::prelude::*;
use portfolio::{App, config::VERSION, logging};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(version = VERSION, "mounting portfolio");
    leptos::mount::mount_to_body(|| view! { <App/> });
}
