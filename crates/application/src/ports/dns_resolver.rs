use async_trait::async_trait;
use rootwalk_domain::{DnsQuery, DomainError};
use std::net::{Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResolution {
    pub address: Ipv4Addr,
    /// Server whose answer section held the address
    pub answered_by: SocketAddr,
    /// Queries sent for this resolution, nested nameserver lookups included
    pub queries: u32,
}

impl DnsResolution {
    pub fn new(address: Ipv4Addr, answered_by: SocketAddr, queries: u32) -> Self {
        Self {
            address,
            answered_by,
            queries,
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
