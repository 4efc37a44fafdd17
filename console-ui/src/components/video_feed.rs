use dioxus::prelude::*;

use crate::console::Detection;
use crate::interop::play_media;

pub const FEED_VIDEO_ID: &str = "live-feed-video";
pub const FEED_VIDEO_SRC: &str = "/drone-feed.mp4";
const TELEMETRY_BEARING: &str = "AZ: 045° | EL: +12°";
const TELEMETRY_ZOOM: &str = "ZOOM: 2.4x";

/// Live camera panel. The video element exists only while the detection is
/// shown, so hiding it also stops and rewinds playback.
#[component]
pub fn VideoFeed(clock: Signal<String>) -> Element {
    let detection = use_context::<Detection>();
    let shown = detection.state().shown;
    let feed_label = detection.summary().feed_label;

    rsx! {
        div {
            class: "feed",
            if shown {
                video {
                    id: FEED_VIDEO_ID,
                    class: "feed-video",
                    src: FEED_VIDEO_SRC,
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    onmounted: move |_| {
                        spawn(async move {
                            if let Err(e) = play_media(FEED_VIDEO_ID).await {
                                detection.report_playback_failure(&e);
                            }
                        });
                    },
                    onplay: move |_| detection.media_playing(true),
                    onpause: move |_| detection.media_playing(false),
                }
            }

            div { class: "feed-grid" }
            div {
                class: "feed-crosshair",
                div { class: "crosshair-h" }
                div { class: "crosshair-v" }
                div { class: "crosshair-ring" }
            }

            div {
                class: "feed-label",
                div { "{feed_label}" }
                div { class: "mono", "{clock}" }
            }

            if shown {
                div {
                    class: "feed-telemetry",
                    div { "{TELEMETRY_BEARING}" }
                    div { "{TELEMETRY_ZOOM}" }
                }
            }
        }
    }
}
