//! # Payoff Configuration System
//!
//! Layered configuration for the payoff simulator.
//!
//! ## Features
//! - **Layering**: defaults, then a YAML file, then `PAYOFF_*` environment variables
//! - **Validation**: every loaded configuration is range-checked before use

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod engine;
mod error;
mod report;
mod telemetry;
mod validation;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use report::ReportConfig;
pub use telemetry::TelemetryConfig;
pub use validation::{LOG_LEVELS, REPORT_FORMATS};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/payoff.yaml";

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `PAYOFF_ENGINE__MAX_PERIODS=600`.
pub const ENV_PREFIX: &str = "PAYOFF_";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone, PartialEq)]
pub struct PayoffConfig {
    /// Simulation loop parameters.
    #[serde(default)]
    #[validate(nested)]
    pub engine: EngineConfig,

    /// Output rendering.
    #[serde(default)]
    #[validate(nested)]
    pub report: ReportConfig,

    /// Logging and metrics.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl PayoffConfig {
    /// Load configuration from the default file and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/payoff.yaml`, if present
    /// 3. `PAYOFF_*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(PayoffConfig::default()));

        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            figment = figment.merge(Yaml::file(DEFAULT_CONFIG_PATH));
        }

        Self::finish(figment)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        let figment =
            Figment::from(Serialized::defaults(PayoffConfig::default())).merge(Yaml::file(path));
        Self::finish(figment)
    }

    /// `load_from_path` when a path is given, `load` otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
