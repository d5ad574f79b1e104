//! Configuration loading and typed config structures for the Pollen simulation.
//!
//! The canonical configuration lives in `pollen-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, and range validation for the
//! user-facing inputs.
//!
//! Every section and field is optional; anything absent takes its default.

use std::path::Path;

use pollen_colony::ColonyConfig;
use serde::Deserialize;

/// Environment variable that overrides `world.seed`.
pub const SEED_ENV_VAR: &str = "POLLEN_SEED";

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A numeric input lies outside its accepted range.
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// The field dimensions are not finite numbers of at least 1.
    #[error("invalid field size {width} x {height}")]
    InvalidFieldSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },

    /// An environment override could not be parsed.
    #[error("environment variable {var} has invalid value {value:?}: {source}")]
    InvalidEnv {
        /// The variable name.
        var: &'static str,
        /// The raw value found.
        value: String,
        /// Why the value did not parse.
        source: std::num::ParseIntError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `pollen-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Seed, field size, and pacing.
    #[serde(default)]
    pub world: WorldConfig,

    /// Initial entity counts.
    #[serde(default)]
    pub population: PopulationConfig,

    /// Initial environmental conditions.
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Bee survival parameters.
    #[serde(default)]
    pub colony: ColonySettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `POLLEN_SEED`, when set, overrides `world.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if the seed override is not a number.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `POLLEN_SEED` is set but is
    /// not an unsigned integer.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
            self.world.override_seed(&raw)?;
        }
        Ok(())
    }

    /// Check every user-facing input against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::OutOfRange`] or
    /// [`ConfigError::InvalidFieldSize`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if !(world.width.is_finite()
            && world.height.is_finite()
            && world.width >= 1.0
            && world.height >= 1.0)
        {
            return Err(ConfigError::InvalidFieldSize {
                width: world.width,
                height: world.height,
            });
        }

        let population = &self.population;
        check_count("population.initial_bees", population.initial_bees, 1, 100)?;
        check_count("population.initial_flowers", population.initial_flowers, 0, 200)?;
        check_count("population.initial_crops", population.initial_crops, 0, 100)?;
        check_count("population.initial_hives", population.initial_hives, 1, 10)?;
        check_range(
            "environment.initial_temperature",
            self.environment.initial_temperature,
            0.0,
            40.0,
        )?;
        check_starvation_threshold(self.colony.starvation_threshold)?;
        Ok(())
    }

    /// Build the per-bee rule parameters from this configuration.
    pub fn colony_config(&self) -> ColonyConfig {
        ColonyConfig::with_starvation_threshold(self.colony.starvation_threshold)
    }
}

/// Check a starvation threshold against its accepted range.
///
/// # Errors
///
/// Returns [`ConfigError::OutOfRange`] outside `[1, 20]`.
pub fn check_starvation_threshold(threshold: u32) -> Result<(), ConfigError> {
    check_count("colony.starvation_threshold", threshold, 1, 20)
}

/// Check an integer input against an inclusive range.
fn check_count(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    check_range(field, f64::from(value), f64::from(min), f64::from(max))
}

/// Check a real input against an inclusive range. NaN is always rejected.
fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Field extent along x.
    #[serde(default = "default_field_size")]
    pub width: f64,

    /// Field extent along y.
    #[serde(default = "default_field_size")]
    pub height: f64,

    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many ticks (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,
}

impl WorldConfig {
    /// Replace the seed with a value parsed from `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `raw` is not an unsigned
    /// integer.
    pub fn override_seed(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.seed = raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidEnv {
                var: SEED_ENV_VAR,
                value: raw.to_owned(),
                source,
            })?;
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            width: default_field_size(),
            height: default_field_size(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
        }
    }
}

/// Initial entity counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationConfig {
    /// Bees spawned at setup, in `[1, 100]`.
    #[serde(default = "default_initial_bees")]
    pub initial_bees: u32,

    /// Flowers spawned at setup, in `[0, 200]`.
    #[serde(default = "default_initial_flowers")]
    pub initial_flowers: u32,

    /// Crops spawned at setup, in `[0, 100]`.
    #[serde(default = "default_initial_crops")]
    pub initial_crops: u32,

    /// Hives spawned at setup, in `[1, 10]`.
    #[serde(default = "default_initial_hives")]
    pub initial_hives: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_bees: default_initial_bees(),
            initial_flowers: default_initial_flowers(),
            initial_crops: default_initial_crops(),
            initial_hives: default_initial_hives(),
        }
    }
}

/// Initial environmental conditions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvironmentConfig {
    /// Starting temperature, in `[0, 40]`.
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            initial_temperature: default_initial_temperature(),
        }
    }
}

/// Bee survival parameters exposed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColonySettings {
    /// Days without food a bee survives, in `[1, 20]`.
    #[serde(default = "default_starvation_threshold")]
    pub starvation_threshold: u32,
}

impl Default for ColonySettings {
    fn default() -> Self {
        Self {
            starvation_threshold: default_starvation_threshold(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_field_size() -> f64 {
    pollen_world::DEFAULT_FIELD_SIZE
}

const fn default_tick_interval_ms() -> u64 {
    100
}

const fn default_initial_bees() -> u32 {
    50
}

const fn default_initial_flowers() -> u32 {
    100
}

const fn default_initial_crops() -> u32 {
    20
}

const fn default_initial_hives() -> u32 {
    1
}

const fn default_initial_temperature() -> f64 {
    20.0
}

const fn default_starvation_threshold() -> u32 {
    10
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.population.initial_bees, 50);
        assert_eq!(config.population.initial_flowers, 100);
        assert_eq!(config.population.initial_crops, 20);
        assert_eq!(config.population.initial_hives, 1);
        assert_eq!(config.colony.starvation_threshold, 10);
        assert_eq!(config.world.max_ticks, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  seed: 123
  width: 40
  height: 25.5
  tick_interval_ms: 0
  max_ticks: 500

population:
  initial_bees: 10
  initial_flowers: 0
  initial_crops: 5
  initial_hives: 3

environment:
  initial_temperature: 12.5

colony:
  starvation_threshold: 4

logging:
  level: "debug"
  format: json
"#;

        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.world.seed, 123);
        assert_eq!(config.world.width.to_bits(), 40.0_f64.to_bits());
        assert_eq!(config.world.max_ticks, 500);
        assert_eq!(config.population.initial_flowers, 0);
        assert_eq!(config.population.initial_hives, 3);
        assert_eq!(config.colony.starvation_threshold, 4);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "world:\n  seed: 7\n";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.world.seed, 7);
        assert_eq!(config.population.initial_bees, 50);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let config = SimulationConfig::parse("population:\n  initial_bees: many\n");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn each_out_of_range_input_is_rejected() {
        let cases: [(&str, fn(&mut SimulationConfig)); 7] = [
            ("population.initial_bees", |c| c.population.initial_bees = 0),
            ("population.initial_bees", |c| c.population.initial_bees = 101),
            ("population.initial_flowers", |c| c.population.initial_flowers = 201),
            ("population.initial_crops", |c| c.population.initial_crops = 101),
            ("population.initial_hives", |c| c.population.initial_hives = 0),
            ("environment.initial_temperature", |c| {
                c.environment.initial_temperature = 40.5;
            }),
            ("colony.starvation_threshold", |c| c.colony.starvation_threshold = 21),
        ];

        for (expected, mutate) in cases {
            let mut config = SimulationConfig::default();
            mutate(&mut config);
            let result = config.validate();
            assert!(
                matches!(result, Err(ConfigError::OutOfRange { field, .. }) if field == expected),
                "expected {expected} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn range_edges_are_accepted() {
        let mut config = SimulationConfig::default();
        config.population.initial_bees = 100;
        config.population.initial_flowers = 0;
        config.population.initial_hives = 10;
        config.environment.initial_temperature = 0.0;
        config.colony.starvation_threshold = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nan_temperature_is_rejected() {
        let mut config = SimulationConfig::default();
        config.environment.initial_temperature = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn degenerate_field_is_rejected() {
        let mut config = SimulationConfig::default();
        config.world.width = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFieldSize { .. })
        ));
    }

    #[test]
    fn seed_override_parses_integers() {
        let mut world = WorldConfig::default();
        assert!(world.override_seed(" 9001 ").is_ok());
        assert_eq!(world.seed, 9001);
        assert!(matches!(
            world.override_seed("abc"),
            Err(ConfigError::InvalidEnv { .. })
        ));
        assert_eq!(world.seed, 9001);
    }

    #[test]
    fn colony_config_carries_threshold() {
        let mut config = SimulationConfig::default();
        config.colony.starvation_threshold = 6;
        assert_eq!(config.colony_config().starvation_threshold, 6);
        assert_eq!(config.colony_config().lifespan, 49);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("pollen-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
            assert!(config.is_ok_and(|c| c.validate().is_ok()));
        }
    }
}
