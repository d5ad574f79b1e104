//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode of startup and the run loop so
//! `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pollen_core::ConfigError,
    },

    /// Building the initial state failed.
    #[error("setup error: {source}")]
    Setup {
        /// The underlying setup error.
        #[from]
        source: pollen_core::SetupError,
    },

    /// Reading the simulation state failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: pollen_core::TickError,
    },

    /// The run loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: pollen_core::RunnerError,
    },

    /// The logging subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the failure.
        message: String,
    },
}
