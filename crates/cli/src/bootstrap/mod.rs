use rootwalk_domain::{CliOverrides, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).map_err(|e| anyhow::anyhow!(e))?;

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        anyhow::anyhow!(e)
    })?;

    Ok(config)
}

/// Logs go to stderr so stdout carries only the resolved address.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match Config::get_config_path() {
        Some(path) => info!(path = %path, "Configuration file found"),
        None => info!("No configuration file found, using defaults"),
    }
}
