use std::time::Duration;

use console_core::config::LIVE_FEED_MARGIN;
use console_core::{
    right_aligned_x, ConsoleConfig, DetectionState, GestureRejection, PlaybackError, Point,
    SequencerPhase, SituationSummary, ThreatLogEntry, WindowController, WindowGeometry,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::runtime::{Clock, SequencerRuntime, Timeline, TimelineEvent, TimelineRecord};
use crate::scenario::{Action, Scenario};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub phase: SequencerPhase,
    pub detection: DetectionState,
    pub summary: SituationSummary,
    pub threat_log: Vec<ThreatLogEntry>,
    pub window: WindowGeometry,
    pub timeline: Vec<TimelineRecord>,
}

/// Replay `scenario` in (tokio) real time and report the final state.
pub async fn run_scenario(scenario: &Scenario, config: &ConsoleConfig, clock: Clock) -> Report {
    let timeline = Timeline::start();
    let runtime = SequencerRuntime::new(config.sequencer.clone(), clock, timeline.clone());
    let mut window = WindowController::new(config.window);
    let started = timeline.started();

    for step in &scenario.steps {
        tokio::time::sleep_until(started + Duration::from_millis(step.at_ms)).await;
        debug!(at_ms = step.at_ms, action = ?step.action, "step");
        apply(&step.action, &runtime, &mut window, &timeline, config);
    }

    tokio::time::sleep_until(started + Duration::from_millis(scenario.end_ms())).await;

    let report = {
        let seq = runtime.lock();
        Report {
            phase: seq.phase(),
            detection: seq.state().clone(),
            summary: seq.summary(),
            threat_log: seq.log().entries().cloned().collect(),
            window: window.geometry(),
            timeline: timeline.snapshot(),
        }
    };
    info!(
        shown = report.detection.shown,
        events = report.timeline.len(),
        "scenario finished"
    );

    // Nothing may outlive the run, including a reveal still pending.
    runtime.set_play_requested(false);
    if window.end_gesture().is_some() {
        debug!("gesture still active at end of run");
    }

    report
}

fn apply(
    action: &Action,
    runtime: &SequencerRuntime,
    window: &mut WindowController,
    timeline: &Timeline,
    config: &ConsoleConfig,
) {
    match action {
        Action::Play => {
            runtime.set_play_requested(true);
        }
        Action::Stop => {
            runtime.set_play_requested(false);
        }
        Action::MediaPlay => {
            runtime.media_playing(true);
        }
        Action::MediaPause => {
            runtime.media_playing(false);
        }
        Action::MediaError { reason } => {
            runtime.playback_failed(&PlaybackError::Rejected(reason.clone()));
        }
        Action::HeaderDown { x, y } => {
            let started = window.begin_drag(Point::new(*x, *y));
            record_start(timeline, "header_down", started.err());
        }
        Action::HandleDown { x, y } => {
            let started = window.begin_resize(Point::new(*x, *y));
            record_start(timeline, "handle_down", started.err());
        }
        Action::PointerMove { x, y } => {
            window.pointer_move(Point::new(*x, *y));
        }
        Action::PointerUp => {
            if window.end_gesture().is_some() {
                record_window(timeline, "pointer_up", window);
            }
        }
        Action::ToggleMinimize => {
            window.toggle_minimized();
            record_window(timeline, "toggle_minimize", window);
        }
        Action::Viewport { width } => {
            let x = right_aligned_x(*width, window.geometry().width, LIVE_FEED_MARGIN);
            if window.apply_default_position(x, config.window.default_y) {
                record_window(timeline, "viewport", window);
            }
        }
    }
}

fn record_start(timeline: &Timeline, action: &str, rejection: Option<GestureRejection>) {
    if let Some(reason) = rejection {
        timeline.record(TimelineEvent::Rejected {
            action: action.to_string(),
            reason: format!("{reason:?}"),
        });
    }
}

fn record_window(timeline: &Timeline, action: &str, window: &WindowController) {
    timeline.record(TimelineEvent::Window {
        action: action.to_string(),
        geometry: window.geometry(),
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use console_core::{Transition, WindowConfig};

    use super::*;
    use crate::scenario::Step;

    fn fixed_clock() -> Clock {
        Arc::new(|| {
            NaiveDate::from_ymd_opt(2026, 10, 16)
                .and_then(|d| d.and_hms_opt(21, 4, 0))
                .unwrap_or_default()
        })
    }

    fn activation_times(report: &Report) -> Vec<u64> {
        report
            .timeline
            .iter()
            .filter(|r| matches!(r.event, TimelineEvent::Sequencer(Transition::Activated { .. })))
            .map(|r| r.at_ms)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn hold_through_delay_activates_once() {
        let scenario = Scenario {
            hold_ms: 6000,
            steps: vec![Step::new(0, Action::Play), Step::new(5500, Action::MediaPlay)],
        };
        let report = run_scenario(&scenario, &ConsoleConfig::default(), fixed_clock()).await;

        assert_eq!(activation_times(&report), vec![5000]);
        assert_eq!(report.threat_log.len(), 5);
        assert_eq!(report.threat_log[0].time, "21:04:00");
        assert_eq!(report.threat_log[0].message, "Threat: Drone in ZONE-3");
        assert!(report.timeline.iter().any(|r| matches!(
            r.event,
            TimelineEvent::Sequencer(Transition::Playing { playing: true })
        )));
        assert_eq!(report.phase, SequencerPhase::Active);
        assert!(report.detection.playing);
        assert_eq!(report.detection.event_timestamp.as_deref(), Some("21:04:00"));
        assert_eq!(report.summary.detection_events, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn early_withdrawal_never_shows() {
        let scenario = Scenario {
            hold_ms: 10_000,
            steps: vec![Step::new(0, Action::Play), Step::new(3000, Action::Stop)],
        };
        let report = run_scenario(&scenario, &ConsoleConfig::default(), fixed_clock()).await;

        assert!(activation_times(&report).is_empty());
        assert!(!report.detection.shown);
        assert_eq!(report.threat_log[0].time, "15:12:05");
    }

    #[tokio::test(start_paused = true)]
    async fn resize_gesture_updates_window() {
        let config = ConsoleConfig {
            window: WindowConfig {
                default_x: 100.0,
                default_y: 80.0,
                default_width: 600.0,
                default_height: 338.0,
                min_width: 300.0,
                min_height: 169.0,
                maintain_aspect_ratio: true,
                aspect_ratio: 16.0 / 9.0,
            },
            ..ConsoleConfig::default()
        };
        let scenario = Scenario {
            hold_ms: 0,
            steps: vec![
                Step::new(0, Action::HandleDown { x: 700.0, y: 418.0 }),
                Step::new(10, Action::HeaderDown { x: 110.0, y: 90.0 }),
                Step::new(20, Action::PointerMove { x: 850.0, y: 458.0 }),
                Step::new(30, Action::PointerUp),
                Step::new(40, Action::Viewport { width: 1280.0 }),
            ],
        };
        let report = run_scenario(&scenario, &config, fixed_clock()).await;

        assert_eq!(report.window.width, 750.0);
        assert!((report.window.height - 421.875).abs() < 1e-9);
        assert_eq!((report.window.x, report.window.y), (100.0, 80.0));
        assert!(report.timeline.iter().any(|r| matches!(
            &r.event,
            TimelineEvent::Rejected { action, .. } if action == "header_down"
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn viewport_repositions_untouched_window() {
        let config = ConsoleConfig::live_feed(1920.0);
        let scenario = Scenario {
            hold_ms: 0,
            steps: vec![Step::new(0, Action::Viewport { width: 1280.0 })],
        };
        let report = run_scenario(&scenario, &config, fixed_clock()).await;
        assert_eq!(report.window.x, 860.0);
        assert_eq!(report.window.y, 80.0);
    }
}
