use console_core::camera_roster;
use dioxus::prelude::*;

#[component]
pub fn ActiveCameras(highlighted_camera: Option<String>) -> Element {
    let cameras = use_hook(camera_roster);

    rsx! {
        div {
            class: "card",
            div { class: "card-title muted", "Active Cameras" }
            div { class: "card-body",
                for camera in cameras.iter() {
                    div {
                        key: "{camera.id}",
                        class: "camera-row",
                        span {
                            class: if highlighted_camera.as_deref() == Some(camera.id.as_str()) { "camera-id camera-alert" } else { "camera-id" },
                            "{camera.id}"
                        }
                        if camera.is_active {
                            span { class: "status-dot" }
                        }
                    }
                }
            }
        }
    }
}
