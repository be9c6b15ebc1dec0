pub use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, Settings};

/// Loads the application configuration from the `dashboard.toml` file.
///
/// The file is optional: every field carries a default matching a local
/// development database, and a `COURTSIDE_*` environment variable overrides
/// any file value (e.g. `COURTSIDE_DATABASE__HOST`). Secrets such as the
/// password should come from the environment, not the file.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Look for a file named `dashboard.toml`; absence is not an error.
        .add_source(config::File::with_name("dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("COURTSIDE")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct.
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
