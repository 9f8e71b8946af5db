//! Configuration for the runner itself

use msnp_adapter::config::Configurable;
use serde::Deserialize;

/// `[runner]` section
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds between metric snapshots in the log; `0` disables them
    #[serde(default)]
    pub metrics_interval_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            metrics_interval_secs: 0,
        }
    }
}

impl Configurable for RunnerConfig {
    const PREFIX: &'static str = "runner";
}

fn default_log_level() -> String {
    "info".to_string()
}
