use dioxus::prelude::*;

const SECTOR: &str = "SECTOR-7";
const LOCATION: &str = "Espoo, Finland";
const COORDINATES: &str = "60.157093649895806, 24.62931446142913";

#[component]
pub fn GridReference() -> Element {
    rsx! {
        div {
            class: "card",
            div { class: "card-title muted", "Grid Reference" }
            div { class: "card-body",
                div { style: "font-size: 0.875rem; font-weight: 500;", "{SECTOR}" }
                div {
                    class: "card-divider",
                    div { style: "color: #d1d5db; font-weight: 500;", "{LOCATION}" }
                    div { class: "mono muted", "{COORDINATES}" }
                }
            }
        }
    }
}
