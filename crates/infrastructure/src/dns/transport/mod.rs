pub mod udp;

use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Exchanges one query for one response with a given server.
///
/// The resolver picks a new server every referral, so the address is passed
/// per call rather than fixed at construction.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
