//! Layered configuration: defaults, config file, `TIMENOW_*` environment
//! variables and command-line flags.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::cli::Cli;

const CONFIG_FILE_NAME: &str = "timenow";
const ENV_PREFIX: &str = "TIMENOW";
const DEFAULT_PROVIDER: &str = "time";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings resolved from defaults, config file, environment and flags,
/// in increasing order of precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub provider: String,
    pub log_level: String,
    #[serde(default)]
    pub fixed_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct Overrides {
    pub provider: Option<String>,
    pub log_level: Option<String>,
    pub fixed_time: Option<String>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            provider: cli.provider.clone(),
            log_level: cli.log_level.clone(),
            fixed_time: cli.at.clone(),
        }
    }
}

impl Settings {
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, overrides, None)
    }

    fn load_with_env(
        config_path: Option<&Path>,
        overrides: Overrides,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE_NAME).required(false),
        };

        Config::builder()
            .set_default("provider", DEFAULT_PROVIDER)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .set_override_option("provider", overrides.provider)?
            .set_override_option("log_level", overrides.log_level)?
            .set_override_option("fixed_time", overrides.fixed_time)?
            .build()?
            .try_deserialize()
    }
}
