//! MSNP Adapter Runner
//!
//! Serves an adapter to an external MSNP server:
//! - Loads configuration from `config.toml`, or from the files given as
//!   arguments, later files overriding earlier ones
//! - Seeds the in-memory directory from the `[directory]` section
//! - Answers JSON-RPC requests on stdin, one per line, with responses on stdout

mod config;
mod dispatch;
mod serve;

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use msnp_adapter::{
    config::ConfigStore,
    memory::{DirectorySeed, MemoryAdapter},
    observability::{spawn_metrics_log_reporter, InMemoryMetrics, InstrumentedAdapter},
};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::RunnerConfig, dispatch::Dispatcher};

#[tokio::main]
async fn main() -> Result<()> {
    let mut paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("config.toml".to_string());
    }

    let mut store = ConfigStore::empty();
    let mut loaded = Vec::new();
    for path in &paths {
        if Path::new(path).exists() {
            store.merge(&ConfigStore::from_file(path)?);
            loaded.push(path.as_str());
        }
    }
    let runner: RunnerConfig = store.get()?;

    // Logs go to stderr; stdout carries the protocol.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&runner.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting MSNP adapter runner...");
    if loaded.is_empty() {
        info!("No configuration found in {:?}, starting empty", paths);
    } else {
        info!("Configuration loaded from {:?}", loaded);
    }

    let seed: DirectorySeed = store.get()?;
    let backend = MemoryAdapter::from_seed(seed).context("Invalid [directory] seed")?;

    let metrics = Arc::new(InMemoryMetrics::new());
    if runner.metrics_interval_secs > 0 {
        spawn_metrics_log_reporter(
            metrics.clone(),
            Duration::from_secs(runner.metrics_interval_secs),
        );
    }

    let dispatcher = Dispatcher::new(InstrumentedAdapter::new(backend, metrics));
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        served = serve::serve(&dispatcher, stdin, stdout) => {
            let answered = served?;
            info!("Input closed after {} requests", answered);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
