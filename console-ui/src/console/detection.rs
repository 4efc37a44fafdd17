use std::time::Duration;

use console_core::{
    DelayHandle, DetectionSequencer, DetectionState, PlaybackError, SequencerConfig,
    SituationSummary, ThreatLogEntry, Transition,
};
use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use gloo_timers::future::TimeoutFuture;

/// Reveal timer running as a Dioxus task; cancelling stops the task.
pub struct TaskDelay(Task);

impl DelayHandle for TaskDelay {
    fn cancel(self) {
        self.0.cancel();
    }
}

fn timeout_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Shared handle to the console's detection timeline, provided as context.
#[derive(Clone, Copy, PartialEq)]
pub struct Detection {
    sequencer: Signal<DetectionSequencer<TaskDelay>>,
}

impl Detection {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            sequencer: Signal::new(DetectionSequencer::new(config)),
        }
    }

    pub fn play_requested(&self) -> bool {
        self.sequencer.read().state().triggered
    }

    pub fn state(&self) -> DetectionState {
        self.sequencer.read().state().clone()
    }

    pub fn summary(&self) -> SituationSummary {
        self.sequencer.read().summary()
    }

    pub fn threat_log(&self) -> Vec<ThreatLogEntry> {
        self.sequencer.read().log().entries().cloned().collect()
    }

    /// Edge-triggered: only a change of the requested value does anything.
    pub fn set_play_requested(self, requested: bool) {
        let mut sequencer = self.sequencer;
        let timer_target = self.sequencer;
        let transition = sequencer
            .write()
            .set_play_requested(requested, move |token, delay| {
                TaskDelay(spawn(async move {
                    TimeoutFuture::new(timeout_ms(delay)).await;
                    let now = chrono::Local::now().naive_local();
                    let mut sequencer = timer_target;
                    let transition = sequencer.write().delay_elapsed(token, &now);
                    if let Transition::Activated { entry } = transition {
                        info!("Live feed revealed at {} ({})", entry.time, entry.message);
                    }
                }))
            });
        if transition != Transition::Unchanged {
            info!("Detection timeline: {:?}", transition);
        }
    }

    pub fn media_playing(self, playing: bool) {
        let mut sequencer = self.sequencer;
        sequencer.write().media_playing(playing);
    }

    pub fn report_playback_failure(&self, error: &PlaybackError) {
        warn!("Live feed playback failed: {}", error);
        self.sequencer.peek().report_playback_failure(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_saturates_instead_of_wrapping() {
        assert_eq!(timeout_ms(Duration::from_millis(5000)), 5000);
        assert_eq!(timeout_ms(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
