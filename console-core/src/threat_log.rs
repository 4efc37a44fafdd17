use std::collections::VecDeque;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatLogEntry {
    /// `DD.MM.YYYY`
    pub date: String,
    /// `HH:MM:SS`, 24-hour
    pub time: String,
    pub message: String,
}

impl ThreatLogEntry {
    pub fn new(date: impl Into<String>, time: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            message: message.into(),
        }
    }

    pub fn at(now: &NaiveDateTime, message: impl Into<String>) -> Self {
        Self::new(format_date(now), format_clock(now), message)
    }
}

/// `HH:MM:SS`, zero padded.
pub fn format_clock(now: &NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// `DD.MM.YYYY`, zero padded.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%d.%m.%Y").to_string()
}

pub fn threat_message(zone: &str) -> String {
    format!("Threat: Drone in {zone}")
}

/// Newest-first log capped at a fixed length. Entries are never removed
/// except by eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatLog {
    entries: VecDeque<ThreatLogEntry>,
    capacity: usize,
}

impl ThreatLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Log pre-populated with the historical sightings shown at startup.
    pub fn seeded(capacity: usize) -> Self {
        let mut log = Self::new(capacity);
        for entry in seed_entries().into_iter().rev() {
            log.prepend(entry);
        }
        log
    }

    pub fn prepend(&mut self, entry: ThreatLogEntry) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ThreatLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ThreatLogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Newest first.
pub fn seed_entries() -> Vec<ThreatLogEntry> {
    vec![
        ThreatLogEntry::new("15.11.2025", "15:12:05", threat_message("ZONE-2")),
        ThreatLogEntry::new("15.11.2025", "09:45:22", threat_message("ZONE-5")),
        ThreatLogEntry::new("13.11.2025", "18:02:11", threat_message("ZONE-1")),
        ThreatLogEntry::new("11.11.2025", "07:55:42", threat_message("ZONE-4")),
        ThreatLogEntry::new("08.11.2025", "21:30:09", threat_message("ZONE-6")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn seeded_log_keeps_order() {
        let log = ThreatLog::seeded(DEFAULT_LOG_CAPACITY);
        let entries: Vec<_> = log.entries().cloned().collect();
        assert_eq!(entries, seed_entries());
        assert_eq!(log.latest().map(|e| e.time.as_str()), Some("15:12:05"));
    }

    #[test]
    fn prepend_evicts_oldest() {
        let mut log = ThreatLog::seeded(DEFAULT_LOG_CAPACITY);
        log.prepend(ThreatLogEntry::new("16.11.2025", "10:00:00", threat_message("ZONE-3")));

        assert_eq!(log.len(), 5);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("Threat: Drone in ZONE-3"));
        assert!(log.entries().all(|e| e.message != "Threat: Drone in ZONE-6"));
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut log = ThreatLog::new(0);
        log.prepend(ThreatLogEntry::new("a", "b", "c"));
        assert!(log.is_empty());
    }

    #[test]
    fn formats_are_zero_padded() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 7)
            .and_then(|d| d.and_hms_opt(4, 5, 9))
            .unwrap();
        assert_eq!(format_clock(&now), "04:05:09");
        assert_eq!(format_date(&now), "07.03.2026");

        let entry = ThreatLogEntry::at(&now, threat_message("ZONE-3"));
        assert_eq!(entry.date, "07.03.2026");
        assert_eq!(entry.time, "04:05:09");
    }
}
