use std::path::PathBuf;

use console_sim::{local_clock, run_scenario, Config, Scenario};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console_sim=debug,console_core=debug".into()),
        )
        // stdout carries the JSON report
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let scenario_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.scenario_path.clone());

    let scenario = match scenario_path {
        Some(path) => {
            info!(path = %path.display(), "loading scenario");
            Scenario::load(&path)?
        }
        None => {
            info!("no scenario given, running the built-in demo");
            Scenario::demo()
        }
    };

    info!(
        steps = scenario.steps.len(),
        end_ms = scenario.end_ms(),
        reveal_delay_ms = config.console.sequencer.reveal_delay_ms,
        viewport_width = config.viewport_width,
        "replaying scenario"
    );
    let report = run_scenario(&scenario, &config.console, local_clock()).await;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
