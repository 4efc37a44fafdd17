use serde::{Deserialize, Serialize};

use crate::sequencer::SequencerConfig;
use crate::window::{right_aligned_x, WindowConfig};

pub const LIVE_FEED_WIDTH: f64 = 400.0;
pub const LIVE_FEED_HEIGHT: f64 = 225.0;
pub const LIVE_FEED_MIN_WIDTH: f64 = 300.0;
pub const LIVE_FEED_MIN_HEIGHT: f64 = 169.0;
pub const LIVE_FEED_TOP: f64 = 80.0;
pub const LIVE_FEED_MARGIN: f64 = 20.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("aspect ratio must be finite and positive, got {0}")]
    AspectRatio(f64),
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("threat log capacity must be at least 1")]
    LogCapacity,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub window: WindowConfig,
    pub sequencer: SequencerConfig,
}

impl ConsoleConfig {
    /// Live-feed window and the stock detection timeline.
    pub fn live_feed(viewport_width: f64) -> Self {
        Self {
            window: live_feed_window(viewport_width),
            sequencer: SequencerConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if !(window.aspect_ratio.is_finite() && window.aspect_ratio > 0.0) {
            return Err(ConfigError::AspectRatio(window.aspect_ratio));
        }
        for (field, value) in [
            ("min_width", window.min_width),
            ("min_height", window.min_height),
            ("default_width", window.default_width),
            ("default_height", window.default_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.sequencer.log_capacity == 0 {
            return Err(ConfigError::LogCapacity);
        }
        Ok(())
    }
}

/// 16:9 live-feed panel pinned to the top right of the viewport.
pub fn live_feed_window(viewport_width: f64) -> WindowConfig {
    WindowConfig {
        default_x: right_aligned_x(viewport_width, LIVE_FEED_WIDTH, LIVE_FEED_MARGIN),
        default_y: LIVE_FEED_TOP,
        default_width: LIVE_FEED_WIDTH,
        default_height: LIVE_FEED_HEIGHT,
        min_width: LIVE_FEED_MIN_WIDTH,
        min_height: LIVE_FEED_MIN_HEIGHT,
        maintain_aspect_ratio: true,
        aspect_ratio: 16.0 / 9.0,
    }
}
