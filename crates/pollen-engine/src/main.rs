//! Host binary for the Pollen simulation.
//!
//! Loads configuration, initializes logging, builds the simulation, and
//! runs the tick loop until the tick limit, extinction, or Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `pollen-config.yaml` (or the path given as
//!    the first argument), falling back to defaults
//! 2. Initialize structured logging (tracing)
//! 3. Set up the simulation from the configuration
//! 4. Create the run control and install the Ctrl-C handler
//! 5. Run the simulation loop with the observable reporter
//! 6. Log the result

mod error;
mod reporter;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pollen_core::config::{LogFormat, LoggingConfig};
use pollen_core::{RunControl, Simulation, SimulationConfig, runner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::reporter::ObservableReporter;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "pollen-config.yaml";

/// Emit an observable report every this many ticks.
const REPORT_EVERY_TICKS: u64 = 10;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step or the simulation itself
/// fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;

    info!("pollen-engine starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        seed = config.world.seed,
        width = config.world.width,
        height = config.world.height,
        tick_interval_ms = config.world.tick_interval_ms,
        max_ticks = config.world.max_ticks,
        starvation_threshold = config.colony.starvation_threshold,
        "Configuration resolved"
    );

    // 3. Set up the simulation.
    let control = Arc::new(RunControl::new(
        config.world.tick_interval_ms,
        config.world.max_ticks,
    ));
    let mut simulation = Simulation::setup(config).map_err(EngineError::from)?;
    let observables = simulation.observables().map_err(EngineError::from)?;
    info!(?observables, "Simulation ready");

    // 4. Stop cleanly on Ctrl-C.
    let stop_control = Arc::clone(&control);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, stopping after the current tick");
                stop_control.request_stop();
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
        }
    });

    // 5. Run the simulation.
    let mut reporter = ObservableReporter::new(REPORT_EVERY_TICKS);
    let result = runner::run_simulation(&mut simulation, &control, &mut reporter)
        .await
        .map_err(EngineError::from)?;

    // 6. Log results.
    runner::log_simulation_end(&result);
    info!(
        end_reason = %result.end_reason,
        total_ticks = result.total_ticks,
        reports = reporter.reports(),
        "pollen-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration from `path`.
///
/// Returns the configuration and whether it came from the file. A missing
/// file yields the defaults with the `POLLEN_SEED` override applied.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        let config = SimulationConfig::from_file(path)?;
        Ok((config, true))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides()?;
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| EngineError::Logging {
        message: format!("{e}"),
    })
}
