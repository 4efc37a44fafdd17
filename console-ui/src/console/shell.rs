use console_core::{live_feed_window, SequencerConfig};
use dioxus::prelude::*;

use crate::components::styles::CONSOLE_STYLES;
use crate::components::{
    ActiveCameras, BattlefieldMap, GridReference, Navbar, StatsPanel, VideoFeed,
};
use crate::console::detection::Detection;
use crate::console::effects;
use crate::interop::viewport_width;
use crate::resizable_window::ResizableWindow;

const FALLBACK_VIEWPORT_WIDTH: f64 = 1920.0;

#[component]
pub fn ConsoleShell() -> Element {
    let detection = use_context_provider(|| Detection::new(SequencerConfig::default()));
    let viewport = use_signal(|| viewport_width().unwrap_or(FALLBACK_VIEWPORT_WIDTH));
    let clock = use_signal(effects::current_clock);

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        spawn(async move {
            effects::tick_clock(clock).await;
        });
    });

    let summary = detection.summary();
    let threat_log = detection.threat_log();
    let feed_window = live_feed_window(viewport());

    rsx! {
        style { {CONSOLE_STYLES} }
        div {
            class: "console-root",
            Navbar { clock }

            div {
                class: "map-frame",
                BattlefieldMap { highlighted_camera: summary.highlighted_camera.clone() }
            }

            div {
                class: "overlay-panel overlay-cameras",
                ActiveCameras { highlighted_camera: summary.highlighted_camera.clone() }
            }

            div {
                class: "overlay-panel overlay-grid",
                GridReference {}
            }

            ResizableWindow {
                title: "LIVE FEED",
                config: feed_window,
                VideoFeed { clock }
            }

            div {
                class: "overlay-panel overlay-stats",
                StatsPanel { summary, threat_log }
            }
        }
    }
}
