use std::path::{Path, PathBuf};

use console_core::ConsoleConfig;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1920.0;

#[derive(Debug, Clone)]
pub struct Config {
    /// Window and sequencer settings handed to the core.
    pub console: ConsoleConfig,
    /// Viewport width used to place the live-feed window.
    pub viewport_width: f64,
    /// Scenario to replay; the built-in demo runs when unset.
    pub scenario_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let viewport_width = env_parse("CONSOLE_VIEWPORT_WIDTH", DEFAULT_VIEWPORT_WIDTH)?;
        let mut console = match std::env::var("CONSOLE_CONFIG") {
            Ok(path) => load_console_config(Path::new(&path))?,
            Err(_) => ConsoleConfig::live_feed(viewport_width),
        };

        console.sequencer.reveal_delay_ms =
            env_parse("CONSOLE_REVEAL_DELAY_MS", console.sequencer.reveal_delay_ms)?;
        console.sequencer.trigger_zone =
            env_str("CONSOLE_TRIGGER_ZONE", &console.sequencer.trigger_zone);
        console.validate()?;

        Ok(Self {
            console,
            viewport_width,
            scenario_path: std::env::var("CONSOLE_SCENARIO").ok().map(PathBuf::from),
        })
    }
}

pub fn load_console_config(path: &Path) -> anyhow::Result<ConsoleConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read console config {}: {e}", path.display()))?;
    parse_console_config(&raw)
        .map_err(|e| anyhow::anyhow!("Invalid console config {}: {e}", path.display()))
}

pub fn parse_console_config(raw: &str) -> Result<ConsoleConfig, toml::de::Error> {
    toml::from_str(raw)
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}
