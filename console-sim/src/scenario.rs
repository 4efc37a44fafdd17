//! Scripted timelines replayed by the simulator.
//!
//! ```toml
//! hold_ms = 6000
//!
//! [[step]]
//! at_ms = 0
//! action = "play"
//!
//! [[step]]
//! at_ms = 200
//! action = "handle_down"
//! x = 700.0
//! y = 300.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("step {index} at {at_ms}ms precedes the previous step at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Play,
    Stop,
    MediaPlay,
    MediaPause,
    MediaError {
        #[serde(default)]
        reason: String,
    },
    HeaderDown {
        x: f64,
        y: f64,
    },
    HandleDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    ToggleMinimize,
    Viewport {
        width: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

impl Step {
    pub fn new(at_ms: u64, action: Action) -> Self {
        Self { at_ms, action }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Keep the runtime alive until this offset after the last step.
    #[serde(default)]
    pub hold_ms: u64,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Play, let the feed reveal and start playing, then hold a second.
    pub fn demo() -> Self {
        Self {
            hold_ms: 6000,
            steps: vec![
                Step::new(0, Action::Play),
                Step::new(5100, Action::MediaPlay),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(raw)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(ScenarioError::OutOfOrder {
                    index: index + 1,
                    at_ms: pair[1].at_ms,
                    previous_ms: pair[0].at_ms,
                });
            }
        }
        Ok(())
    }

    /// Offset at which the run ends.
    pub fn end_ms(&self) -> u64 {
        let last = self.steps.last().map(|s| s.at_ms).unwrap_or(0);
        last.max(self.hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_with_coordinates() {
        let scenario = Scenario::parse(
            r#"
            hold_ms = 6000

            [[step]]
            at_ms = 0
            action = "play"

            [[step]]
            at_ms = 100
            action = "handle_down"
            x = 700
            y = 418.5

            [[step]]
            at_ms = 150
            action = "media_error"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.hold_ms, 6000);
        assert_eq!(scenario.steps[0], Step::new(0, Action::Play));
        assert_eq!(
            scenario.steps[1].action,
            Action::HandleDown { x: 700.0, y: 418.5 }
        );
        assert_eq!(
            scenario.steps[2].action,
            Action::MediaError {
                reason: String::new()
            }
        );
        assert_eq!(scenario.end_ms(), 6000);
    }

    #[test]
    fn rejects_out_of_order_steps() {
        let err = Scenario::parse(
            r#"
            [[step]]
            at_ms = 500
            action = "play"

            [[step]]
            at_ms = 100
            action = "stop"
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ScenarioError::OutOfOrder {
                index: 1,
                at_ms: 100,
                previous_ms: 500
            }
        ));
    }

    #[test]
    fn rejects_unknown_action() {
        let err = Scenario::parse("[[step]]\nat_ms = 0\naction = \"launch\"").unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn demo_is_ordered() {
        let demo = Scenario::demo();
        assert!(demo.validate().is_ok());
        assert_eq!(demo.end_ms(), 6000);
    }
}
