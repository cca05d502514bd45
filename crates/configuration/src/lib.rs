use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, LoggingSettings, ReportSettings};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "reports.toml";

/// Prefix of environment variables that override file settings,
/// e.g. `REPORTS__REPORT__TARGET_CURRENCY=EUR`.
pub const ENV_PREFIX: &str = "REPORTS";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file (`path`, or
/// `reports.toml` if present), then `REPORTS__*` environment variables. The
/// result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
