use serde::{Deserialize, Serialize};

/// Placeholder label shown on the feed before a detection is revealed.
pub const UNASSIGNED_FEED_LABEL: &str = "CAM-XX";

/// Camera position on the battlefield map, in percent of the map extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraMarker {
    pub id: String,
    pub x_pct: f64,
    pub y_pct: f64,
    /// Bearing of the field-of-view cone, degrees clockwise from north.
    pub bearing_deg: f64,
    pub has_field_of_view: bool,
    pub is_active: bool,
}

impl CameraMarker {
    fn active(id: &str, x_pct: f64, y_pct: f64, bearing_deg: f64) -> Self {
        Self {
            id: id.to_string(),
            x_pct,
            y_pct,
            bearing_deg,
            has_field_of_view: true,
            is_active: true,
        }
    }
}

pub fn camera_roster() -> Vec<CameraMarker> {
    let mut roster = vec![
        CameraMarker::active("CAM-03", 39.0, 38.0, 0.0),
        CameraMarker::active("CAM-02", 37.0, 36.0, 90.0),
        CameraMarker::active("CAM-01", 18.0, 20.0, 310.0),
        CameraMarker::active("CAM-05", 51.0, 75.0, 350.0),
        CameraMarker::active("CAM-04", 50.0, 70.0, 95.0),
        CameraMarker::active("CAM-06", 65.0, 90.0, 90.0),
    ];
    roster.sort_by(|a, b| a.id.cmp(&b.id));
    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_sorted_and_active() {
        let roster = camera_roster();
        let ids: Vec<_> = roster.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["CAM-01", "CAM-02", "CAM-03", "CAM-04", "CAM-05", "CAM-06"]);
        assert!(roster.iter().all(|c| c.is_active && c.has_field_of_view));
    }
}
