use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::NaiveDateTime;
use console_core::{
    ArmToken, DelayHandle, DetectionSequencer, PlaybackError, SequencerConfig, Transition,
    WindowGeometry,
};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().naive_local())
}

/// Reveal timer backed by a tokio task; cancelling aborts it.
#[derive(Debug)]
pub struct TokioDelay(JoinHandle<()>);

impl DelayHandle for TokioDelay {
    fn cancel(self) {
        self.0.abort();
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TimelineEvent {
    Sequencer(Transition),
    Window {
        action: String,
        geometry: WindowGeometry,
    },
    Rejected {
        action: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineRecord {
    pub at_ms: u64,
    pub event: TimelineEvent,
}

/// Shared, ordered record of everything observed during a run.
#[derive(Clone)]
pub struct Timeline {
    started: Instant,
    records: Arc<Mutex<Vec<TimelineRecord>>>,
}

impl Timeline {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn record(&self, event: TimelineEvent) {
        let at_ms = self.elapsed_ms();
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TimelineRecord { at_ms, event });
    }

    pub fn snapshot(&self) -> Vec<TimelineRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Drives a [`DetectionSequencer`] on the tokio runtime.
#[derive(Clone)]
pub struct SequencerRuntime {
    sequencer: Arc<Mutex<DetectionSequencer<TokioDelay>>>,
    clock: Clock,
    timeline: Timeline,
}

impl SequencerRuntime {
    pub fn new(config: SequencerConfig, clock: Clock, timeline: Timeline) -> Self {
        Self {
            sequencer: Arc::new(Mutex::new(DetectionSequencer::new(config))),
            clock,
            timeline,
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, DetectionSequencer<TokioDelay>> {
        self.sequencer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_play_requested(&self, requested: bool) -> Transition {
        let transition = self
            .lock()
            .set_play_requested(requested, |token, delay| self.spawn_reveal(token, delay));
        self.observe(transition)
    }

    pub fn media_playing(&self, playing: bool) -> Transition {
        let transition = self.lock().media_playing(playing);
        self.observe(transition)
    }

    pub fn playback_failed(&self, error: &PlaybackError) {
        self.lock().report_playback_failure(error);
    }

    fn spawn_reveal(&self, token: ArmToken, delay: Duration) -> TokioDelay {
        let runtime = self.clone();
        TokioDelay(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let now = (runtime.clock)();
            let transition = runtime.lock().delay_elapsed(token, &now);
            runtime.observe(transition);
        }))
    }

    fn observe(&self, transition: Transition) -> Transition {
        if transition != Transition::Unchanged {
            self.timeline
                .record(TimelineEvent::Sequencer(transition.clone()));
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use console_core::SequencerPhase;

    use super::*;

    fn fixed_clock() -> Clock {
        Arc::new(|| {
            NaiveDate::from_ymd_opt(2026, 10, 16)
                .and_then(|d| d.and_hms_opt(12, 30, 5))
                .unwrap_or_default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_fires_after_delay() {
        let runtime = SequencerRuntime::new(SequencerConfig::default(), fixed_clock(), Timeline::start());
        runtime.set_play_requested(true);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(runtime.lock().phase(), SequencerPhase::Armed);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let seq = runtime.lock();
        assert!(seq.shown());
        assert_eq!(seq.state().event_timestamp.as_deref(), Some("12:30:05"));
        assert_eq!(seq.log().latest().map(|e| e.date.as_str()), Some("16.10.2026"));
    }

    #[tokio::test(start_paused = true)]
    async fn withdrawal_aborts_pending_reveal() {
        let runtime = SequencerRuntime::new(SequencerConfig::default(), fixed_clock(), Timeline::start());
        runtime.set_play_requested(true);
        tokio::time::sleep(Duration::from_millis(3000)).await;
        runtime.set_play_requested(false);

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        let seq = runtime.lock();
        assert_eq!(seq.phase(), SequencerPhase::Idle);
        assert!(!seq.shown());
        assert_eq!(seq.log().len(), 5);
        assert_eq!(seq.log().latest().map(|e| e.time.as_str()), Some("15:12:05"));
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_transitions_are_not_recorded() {
        let timeline = Timeline::start();
        let runtime = SequencerRuntime::new(SequencerConfig::default(), fixed_clock(), timeline.clone());
        runtime.set_play_requested(false);
        runtime.media_playing(true);
        runtime.set_play_requested(true);
        runtime.set_play_requested(true);

        let records = timeline.snapshot();
        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0].event,
            TimelineEvent::Sequencer(Transition::Armed { .. })
        ));
    }
}
