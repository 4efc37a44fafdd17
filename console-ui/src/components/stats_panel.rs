use console_core::{AlertLevel, SituationSummary, ThreatLogEntry};
use dioxus::prelude::*;

fn alert_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::High => "stat-value alert-high",
        AlertLevel::Low => "stat-value alert-low",
    }
}

#[component]
pub fn StatsPanel(summary: SituationSummary, threat_log: Vec<ThreatLogEntry>) -> Element {
    let level = summary.alert_level;

    rsx! {
        div {
            class: "card",
            div { class: "card-title", "SYSTEM STATUS" }
            div { class: "card-body",
                div {
                    class: "stats-row",
                    div {
                        div { class: "stat-label", "Detection Events (24h)" }
                        div { class: "stat-value", "{summary.detection_events}" }
                    }
                    div {
                        div { class: "stat-label", "Alert Level" }
                        div { class: alert_class(level), "{level.label()}" }
                    }
                }

                div {
                    class: "card-divider",
                    div { class: "stat-label", "Recent Threats" }
                    if threat_log.is_empty() {
                        div { class: "threat-empty", "No recent threats" }
                    }
                    for (index, entry) in threat_log.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if summary.highlight_latest_entry && index == 0 { "threat-entry threat-entry-new" } else { "threat-entry" },
                            span { class: "mono", "{entry.date}" }
                            span { class: "mono", "{entry.time}" }
                            span { "{entry.message}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_level_maps_to_colour_class() {
        assert!(alert_class(AlertLevel::High).contains("alert-high"));
        assert!(alert_class(AlertLevel::Low).contains("alert-low"));
    }
}
