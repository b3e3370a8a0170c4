//! Layered configuration loading
//!
//! Later layers override earlier ones:
//! 1. Plain environment variables (`SERVER_PORT`, `PROVIDER_CLIENT_ID`, ...) and built-in defaults
//! 2. `config/default.{toml,json,yaml}`, optional
//! 3. `config/<environment>.{toml,json,yaml}`, optional
//! 4. `IDV__SECTION__KEY` variables, e.g. `IDV__SERVER__PORT=9090`

use std::path::Path;

use config::{Config, ConfigError, File};

use idv_shared::config::AppConfig;

pub const ENV_PREFIX: &str = "IDV";
const ENV_SEPARATOR: &str = "__";

/// Load configuration relative to the working directory
pub fn load() -> Result<AppConfig, ConfigError> {
    load_from(Path::new("."), AppConfig::from_env())
}

/// Load configuration from `base_dir`, starting from `defaults`
///
/// The environment named in `defaults` selects the per-environment file.
pub fn load_from(base_dir: &Path, defaults: AppConfig) -> Result<AppConfig, ConfigError> {
    build(base_dir, defaults, prefixed_env())
}

fn prefixed_env() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn build(
    base_dir: &Path,
    defaults: AppConfig,
    overrides: config::Environment,
) -> Result<AppConfig, ConfigError> {
    let default_file = base_dir.join("config").join("default");
    let environment_file = base_dir.join(defaults.environment.config_file());

    log::debug!(
        "Loading configuration for {} from {}",
        defaults.environment,
        base_dir.display()
    );

    let settings = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
        .add_source(File::with_name(&environment_file.to_string_lossy()).required(false))
        .add_source(overrides)
        .build()?;

    settings.try_deserialize()
}
