use rootwalk_domain::{Config, ConfigError};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub root_server: SocketAddr,

    /// Port used for nameservers learned from referrals
    pub port: u16,

    pub query_timeout: Duration,

    pub max_queries: u32,

    pub max_ns_depth: u8,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            root_server: SocketAddr::from((Ipv4Addr::new(198, 41, 0, 4), 53)),
            port: 53,
            query_timeout: Duration::from_secs(5),
            max_queries: 32,
            max_ns_depth: 4,
        }
    }
}

impl ResolverSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            root_server: config.root_server_addr()?,
            port: config.resolver.port,
            query_timeout: config.query_timeout(),
            max_queries: config.resolver.max_queries,
            max_ns_depth: config.resolver.max_ns_depth,
        })
    }

    pub fn with_root(mut self, root_server: SocketAddr) -> Self {
        self.root_server = root_server;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_max_queries(mut self, max_queries: u32) -> Self {
        self.max_queries = max_queries;
        self
    }

    pub fn with_max_ns_depth(mut self, max_ns_depth: u8) -> Self {
        self.max_ns_depth = max_ns_depth;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
