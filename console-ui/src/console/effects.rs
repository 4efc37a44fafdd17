use console_core::format_clock;
use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interop::viewport_width;

const CLOCK_TICK_MS: u32 = 1000;

pub fn current_clock() -> String {
    format_clock(&chrono::Local::now().naive_local())
}

pub async fn track_viewport(mut viewport: Signal<f64>) {
    if let Some(width) = viewport_width() {
        viewport.set(width);
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(width) = viewport_width() {
            viewport.set(width);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

/// Refresh the `HH:MM:SS` clock once a second for as long as the owning
/// scope lives.
pub async fn tick_clock(mut clock: Signal<String>) {
    loop {
        clock.set(current_clock());
        TimeoutFuture::new(CLOCK_TICK_MS).await;
    }
}
