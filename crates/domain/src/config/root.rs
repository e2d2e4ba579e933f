use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "rootwalk.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rootwalk/config.toml";

/// Smallest buffer that can hold a DNS header.
const MIN_RECV_BUFFER: usize = 12;

/// Main configuration structure for Rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Referral walk configuration (root server, budgets, timeouts)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(root) = overrides.root_server {
            self.resolver.root_server = root;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(max) = overrides.max_queries {
            self.resolver.max_queries = max;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root_server_addr()?;

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }
        if self.resolver.max_queries == 0 {
            return Err(ConfigError::Validation(
                "Query budget must allow at least one query".to_string(),
            ));
        }
        if self.resolver.recv_buffer_size < MIN_RECV_BUFFER {
            return Err(ConfigError::Validation(format!(
                "Receive buffer of {} bytes cannot hold a DNS header",
                self.resolver.recv_buffer_size
            )));
        }

        Ok(())
    }

    /// Socket address of the configured root nameserver
    pub fn root_server_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: Ipv4Addr = self.resolver.root_server.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Root server '{}' is not an IPv4 address",
                self.resolver.root_server
            ))
        })?;
        Ok(SocketAddr::V4(SocketAddrV4::new(ip, self.resolver.port)))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.resolver.query_timeout_ms)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub root_server: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub max_queries: Option<u32>,
    pub log_level: Option<String>,
}
