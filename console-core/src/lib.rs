//! Core state for the drone detection console
//!
//! Used by both:
//! - the Dioxus browser console (WASM)
//! - the headless scenario simulator (native, tokio)
//!
//! Nothing in here touches the DOM or a clock; callers pass pointer
//! positions and wall-clock times in.

pub mod cameras;
pub mod config;
pub mod sequencer;
pub mod threat_log;
pub mod window;

pub use cameras::{camera_roster, CameraMarker, UNASSIGNED_FEED_LABEL};
pub use config::{live_feed_window, ConfigError, ConsoleConfig};
pub use sequencer::{
    AlertLevel, ArmToken, DelayHandle, DetectionSequencer, DetectionState, PlaybackError,
    SequencerConfig, SequencerPhase, SituationSummary, Transition, DEFAULT_REVEAL_DELAY_MS,
};
pub use threat_log::{format_clock, format_date, ThreatLog, ThreatLogEntry};
pub use window::{
    right_aligned_x, Gesture, GestureCursor, GestureRejection, Point, WindowConfig,
    WindowController, WindowGeometry,
};
