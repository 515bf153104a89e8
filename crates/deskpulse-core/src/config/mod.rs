//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every section carries serde defaults, so running without any
//! configuration file yields a working local setup.

pub mod app;
pub mod dashboard;
pub mod dataset;
pub mod generator;
pub mod logging;
pub mod monitor;
pub mod workflow;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::dashboard::DashboardConfig;
use self::dataset::DatasetConfig;
use self::generator::GeneratorConfig;
use self::logging::LoggingConfig;
use self::monitor::MonitorConfig;
use self::workflow::WorkflowConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DESKPULSE";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Ticket dataset location.
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Workflow-automation webhook settings.
    #[serde(default)]
    pub workflow: WorkflowConfig,
    /// Periodic alert monitor settings.
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Dashboard presentation thresholds.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Sample-data generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the conventional `config/` directory.
    ///
    /// Merges `config/default` with an environment-specific overlay and
    /// environment variables prefixed with `DESKPULSE_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration from an explicit base file plus the environment overlay.
    ///
    /// Neither file is required; missing files fall back to defaults.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let base = base.trim_end_matches(".toml");
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
