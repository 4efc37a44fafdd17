use console_core::{camera_roster, CameraMarker};
use dioxus::prelude::*;

const MAP_IMAGE_SRC: &str = "/battlefield-map.png";
const HQ_OUTLINE: &str = "polygon(52% 34%, 61% 43%, 60% 53%, 53.5% 48%)";
const HQ_CORNERS: [(f64, f64); 4] = [(52.0, 34.0), (61.0, 43.0), (60.0, 53.0), (53.5, 48.0)];
const HQ_COLOR: &str = "#0E02FA";

fn marker_style(marker: &CameraMarker) -> String {
    format!(
        "position: absolute; left: {}%; top: {}%; transform: translate(-50%, -50%); z-index: 10;",
        marker.x_pct, marker.y_pct
    )
}

/// Field-of-view cone, rotated about the marker centre.
fn cone_style(marker: &CameraMarker) -> String {
    format!(
        "position: absolute; left: 50%; bottom: 50%; width: 60px; height: 70px; \
         transform: translateX(-50%) rotate({}deg); transform-origin: 50% 100%; \
         clip-path: polygon(50% 100%, 0 0, 100% 0); pointer-events: none;",
        marker.bearing_deg
    )
}

#[component]
pub fn BattlefieldMap(highlighted_camera: Option<String>) -> Element {
    let cameras = use_hook(camera_roster);
    let mut hovering_hq = use_signal(|| false);

    rsx! {
        div {
            class: "battlefield-map",
            img { class: "map-image", src: MAP_IMAGE_SRC, alt: "Satellite Map" }

            svg {
                class: "map-grid",
                "xmlns": "http://www.w3.org/2000/svg",
                defs {
                    pattern {
                        id: "grid-pattern",
                        "x": "0",
                        "y": "0",
                        "width": "120",
                        "height": "120",
                        "patternUnits": "userSpaceOnUse",
                        line { "x1": "55", "y1": "60", "x2": "65", "y2": "60", "stroke": "white", "stroke-width": "0.5" }
                        line { "x1": "60", "y1": "55", "x2": "60", "y2": "65", "stroke": "white", "stroke-width": "0.5" }
                    }
                }
                rect { "width": "100%", "height": "100%", "fill": "url(#grid-pattern)" }
            }

            div {
                class: "map-hq",
                div {
                    class: "hq-area",
                    style: "clip-path: {HQ_OUTLINE}; background-color: {HQ_COLOR};",
                    onmouseenter: move |_| hovering_hq.set(true),
                    onmouseleave: move |_| hovering_hq.set(false),
                }
                for (index, (x, y)) in HQ_CORNERS.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "hq-corner",
                        style: "left: {x}%; top: {y}%; background-color: {HQ_COLOR};",
                    }
                }
                if hovering_hq() {
                    div {
                        class: "hq-tooltip",
                        div { style: "font-weight: 600; font-size: 0.875rem;", "HQ: Hybridiarena Hype" }
                        div { class: "muted", style: "font-size: 0.75rem; margin-top: 0.25rem;", "Defense-Systems active" }
                    }
                }
            }

            for camera in cameras.iter() {
                div {
                    key: "{camera.id}",
                    class: "camera-marker",
                    style: marker_style(camera),
                    if camera.has_field_of_view {
                        div {
                            class: if highlighted_camera.as_deref() == Some(camera.id.as_str()) { "camera-cone camera-cone-alert" } else { "camera-cone" },
                            style: cone_style(camera),
                        }
                    }
                    div {
                        class: if camera.is_active { "camera-dot" } else { "camera-dot camera-dot-offline" },
                    }
                    span { class: "camera-tag", "{camera.id}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_placed_in_percent_of_the_map() {
        let roster = camera_roster();
        let cam03 = roster.iter().find(|c| c.id == "CAM-03").unwrap();
        let style = marker_style(cam03);
        assert!(style.contains("left: 39%;"));
        assert!(style.contains("top: 38%;"));
    }

    #[test]
    fn cone_follows_bearing() {
        let roster = camera_roster();
        let cam01 = roster.iter().find(|c| c.id == "CAM-01").unwrap();
        assert!(cone_style(cam01).contains("rotate(310deg)"));
    }
}
