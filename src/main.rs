mod app;
mod config;
mod dom;
mod drag;
mod error;
mod input;
mod math;
mod resize;
mod slider;
mod viewer;

use gloo::events::EventListener;

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| app::launch()).forget();
    } else {
        app::launch();
    }
}
