//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Responses longer than the receive
//! buffer are cut short by the socket; the message decoder reports that as a
//! malformed response because the header counts no longer fit.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

/// DNS over UDP transport
///
/// Each exchange binds its own ephemeral socket, which is closed when the
/// exchange returns, so concurrent callers never share state.
pub struct UdpTransport {
    recv_buffer_size: usize,
}

impl UdpTransport {
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_RECV_BUFFER_SIZE)
    }

    pub fn with_buffer_size(recv_buffer_size: usize) -> Self {
        Self { recv_buffer_size }
    }

    pub fn recv_buffer_size(&self) -> usize {
        self.recv_buffer_size
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| transport_error(server, format!("failed to send UDP query: {}", e)))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::QueryTimeout {
                    server: server.to_string(),
                })?
                .map_err(|e| {
                    transport_error(server, format!("failed to receive UDP response: {}", e))
                })?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);
        validate_response_id(message_bytes, &recv_buf, server)?;

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn transport_error(server: SocketAddr, reason: String) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason,
    }
}

/// Reject a response whose transaction id differs from the query's.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 {
        return Err(DomainError::EncodeError(
            "query shorter than a transaction id".to_string(),
        ));
    }
    if response.len() < 2 {
        return Err(DomainError::malformed(format!(
            "{}-byte response from {} has no transaction id",
            response.len(),
            server
        )));
    }

    let expected = u16::from_be_bytes([query[0], query[1]]);
    let received = u16::from_be_bytes([response[0], response[1]]);
    if expected != received {
        warn!(
            server = %server,
            expected = expected,
            received = received,
            "DNS response id mismatch"
        );
        return Err(DomainError::ResponseIdMismatch { expected, received });
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
