//! Detection event timeline.
//!
//! `Idle -> Armed -> Active`, with any withdrawal of the play request
//! returning to `Idle`. The reveal delay is owned by the caller's runtime
//! (a Dioxus task in the browser, a tokio task in the simulator); the
//! sequencer only keeps the handle so it can cancel it on the way out of
//! `Armed`.

use std::time::Duration;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cameras::UNASSIGNED_FEED_LABEL;
use crate::threat_log::{
    format_clock, threat_message, ThreatLog, ThreatLogEntry, DEFAULT_LOG_CAPACITY,
};

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    pub reveal_delay_ms: u64,
    pub log_capacity: usize,
    /// Camera whose feed reveals the detection.
    pub trigger_camera: String,
    /// Zone named in the synthetic log entry.
    pub trigger_zone: String,
    /// Detection-event counter shown before any activation.
    pub baseline_detection_events: u32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            log_capacity: DEFAULT_LOG_CAPACITY,
            trigger_camera: "CAM-03".to_string(),
            trigger_zone: "ZONE-3".to_string(),
            baseline_detection_events: 1,
        }
    }
}

impl SequencerConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// A pending reveal timer owned by the host runtime.
pub trait DelayHandle {
    /// Stop the timer so it can never fire.
    fn cancel(self);
}

/// Identifies one arming. A firing carrying an old token is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArmToken(u64);

impl ArmToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerPhase {
    Idle,
    Armed,
    Active,
}

enum Phase<H> {
    Idle,
    Armed { token: ArmToken, timer: H },
    Active,
}

impl<H> Phase<H> {
    fn kind(&self) -> SequencerPhase {
        match self {
            Self::Idle => SequencerPhase::Idle,
            Self::Armed { .. } => SequencerPhase::Armed,
            Self::Active => SequencerPhase::Active,
        }
    }
}

/// Signals fanned out to the alert banner, stats panel, camera list and
/// video panel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DetectionState {
    pub triggered: bool,
    pub shown: bool,
    pub playing: bool,
    pub event_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Unchanged,
    Armed { token: ArmToken },
    Activated { entry: ThreatLogEntry },
    Reset { from: SequencerPhase },
    Playing { playing: bool },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("media playback rejected: {0}")]
    Rejected(String),
    #[error("media element unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Low,
    High,
}

impl AlertLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

/// Read-only view derived from `shown` for the presentational panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SituationSummary {
    pub alert_level: AlertLevel,
    pub detection_events: u32,
    pub highlighted_camera: Option<String>,
    pub feed_label: String,
    pub highlight_latest_entry: bool,
}

pub struct DetectionSequencer<H> {
    config: SequencerConfig,
    phase: Phase<H>,
    state: DetectionState,
    log: ThreatLog,
    next_token: u64,
}

impl<H: DelayHandle> DetectionSequencer<H> {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            log: ThreatLog::seeded(config.log_capacity),
            config,
            phase: Phase::Idle,
            state: DetectionState::default(),
            next_token: 0,
        }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn phase(&self) -> SequencerPhase {
        self.phase.kind()
    }

    pub fn state(&self) -> &DetectionState {
        &self.state
    }

    pub fn shown(&self) -> bool {
        self.state.shown
    }

    pub fn playing(&self) -> bool {
        self.state.playing
    }

    pub fn log(&self) -> &ThreatLog {
        &self.log
    }

    /// Apply the current value of the "play requested" signal. Only edges
    /// change state; `schedule` is invoked once per arming and must start a
    /// timer that later calls [`Self::delay_elapsed`] with the given token.
    pub fn set_play_requested<F>(&mut self, requested: bool, schedule: F) -> Transition
    where
        F: FnOnce(ArmToken, Duration) -> H,
    {
        if requested {
            self.request_play(schedule)
        } else {
            self.withdraw()
        }
    }

    pub fn request_play<F>(&mut self, schedule: F) -> Transition
    where
        F: FnOnce(ArmToken, Duration) -> H,
    {
        if !matches!(self.phase, Phase::Idle) {
            tracing::debug!(phase = ?self.phase(), "play already requested");
            return Transition::Unchanged;
        }

        self.next_token += 1;
        let token = ArmToken(self.next_token);
        let delay = self.config.reveal_delay();
        let timer = schedule(token, delay);
        self.phase = Phase::Armed { token, timer };
        self.state.triggered = true;
        tracing::debug!(token = token.get(), delay_ms = self.config.reveal_delay_ms, "detection armed");
        Transition::Armed { token }
    }

    /// Withdraw the play request. Cancels a pending reveal and hides an
    /// active one; the threat log is left as is.
    pub fn withdraw(&mut self) -> Transition {
        let from = self.phase();
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => return Transition::Unchanged,
            Phase::Armed { timer, .. } => timer.cancel(),
            Phase::Active => {}
        }

        self.state = DetectionState::default();
        tracing::info!(?from, "detection reset");
        Transition::Reset { from }
    }

    /// Timer callback. Activates only if `token` is the current arming.
    pub fn delay_elapsed(&mut self, token: ArmToken, now: &NaiveDateTime) -> Transition {
        match &self.phase {
            Phase::Armed { token: current, .. } if *current == token => {}
            _ => {
                tracing::warn!(token = token.get(), phase = ?self.phase(), "ignoring stale reveal timer");
                return Transition::Unchanged;
            }
        }

        self.phase = Phase::Active;
        let entry = ThreatLogEntry::at(now, threat_message(&self.config.trigger_zone));
        self.state.shown = true;
        self.state.event_timestamp = Some(format_clock(now));
        self.log.prepend(entry.clone());
        tracing::info!(
            camera = %self.config.trigger_camera,
            zone = %self.config.trigger_zone,
            at = %entry.time,
            "detection shown"
        );
        Transition::Activated { entry }
    }

    /// Media element play/pause notification. Ignored unless shown.
    pub fn media_playing(&mut self, playing: bool) -> Transition {
        if !self.state.shown {
            tracing::debug!(playing, "media notification while hidden");
            return Transition::Unchanged;
        }
        if self.state.playing == playing {
            return Transition::Unchanged;
        }
        self.state.playing = playing;
        Transition::Playing { playing }
    }

    /// Playback failures never affect `shown`.
    pub fn report_playback_failure(&self, error: &PlaybackError) {
        tracing::warn!(camera = %self.config.trigger_camera, %error, "live feed playback failed");
    }

    pub fn summary(&self) -> SituationSummary {
        let shown = self.state.shown;
        SituationSummary {
            alert_level: if shown { AlertLevel::High } else { AlertLevel::Low },
            detection_events: self.config.baseline_detection_events + u32::from(shown),
            highlighted_camera: shown.then(|| self.config.trigger_camera.clone()),
            feed_label: if shown {
                self.config.trigger_camera.clone()
            } else {
                UNASSIGNED_FEED_LABEL.to_string()
            },
            highlight_latest_entry: shown,
        }
    }
}

impl<H> std::fmt::Debug for DetectionSequencer<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionSequencer")
            .field("phase", &self.phase.kind())
            .field("state", &self.state)
            .field("log_len", &self.log.len())
            .finish()
    }
}
