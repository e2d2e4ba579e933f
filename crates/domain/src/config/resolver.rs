use serde::{Deserialize, Serialize};

/// Settings for the iterative referral walk.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IPv4 address of the root nameserver every walk starts from
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deadline for a single query/response exchange
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Total queries allowed for one resolution, nested NS lookups included
    #[serde(default = "default_max_queries")]
    pub max_queries: u32,

    /// How deep nameserver-hostname lookups may nest
    #[serde(default = "default_max_ns_depth")]
    pub max_ns_depth: u8,

    /// Receive buffer capacity; longer datagrams are cut to this size
    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_queries: default_max_queries(),
            max_ns_depth: default_max_ns_depth(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_root_server() -> String {
    // a.root-servers.net
    "198.41.0.4".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_queries() -> u32 {
    32
}

fn default_max_ns_depth() -> u8 {
    4
}

fn default_recv_buffer_size() -> usize {
    1024
}
