//! Dashboard shell: layout, the detection timeline and browser effects.

use dioxus::prelude::*;

mod detection;
mod effects;
mod shell;

pub use detection::{Detection, TaskDelay};
pub use shell::ConsoleShell;

#[component]
pub fn Console() -> Element {
    rsx! {
        ConsoleShell {}
    }
}
