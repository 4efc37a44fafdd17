//! Headless replay of console timelines on a tokio runtime.

pub mod config;
pub mod runner;
pub mod runtime;
pub mod scenario;

pub use config::Config;
pub use runner::{run_scenario, Report};
pub use runtime::{local_clock, Clock, SequencerRuntime, Timeline, TimelineEvent, TokioDelay};
pub use scenario::{Action, Scenario, ScenarioError, Step};
