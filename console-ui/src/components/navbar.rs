use dioxus::prelude::*;

use crate::console::Detection;

#[component]
pub fn Navbar(clock: Signal<String>) -> Element {
    let detection = use_context::<Detection>();
    let play_requested = detection.play_requested();
    let (label, class) = if play_requested {
        ("Stop demo", "play-toggle play-toggle-active")
    } else {
        ("Play demo", "play-toggle")
    };

    rsx! {
        nav {
            class: "console-navbar",
            h1 { class: "console-title", "DDD: Drone Detection & Destruction" }
            div {
                class: "navbar-status",
                button {
                    class: "{class}",
                    "aria-pressed": if play_requested { "true" } else { "false" },
                    onclick: move |_| detection.set_play_requested(!play_requested),
                    "{label}"
                }
                span { class: "status-online", "ONLINE" }
                span { class: "mono", "{clock}" }
            }
        }
    }
}
