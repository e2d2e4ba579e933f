#![allow(dead_code)]
use super::builders::ResponseBuilder;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use rootwalk_infrastructure::dns::{DnsTransport, Message, TransportResponse};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
pub enum ScriptedReply {
    Message(Message),
    Raw(Vec<u8>),
    Error(DomainError),
}

/// In-memory nameservers keyed by (server, query name).
///
/// Queries with no scripted reply fail with a transport error, so a walk
/// that strays from the script shows up as an error rather than a hang.
pub struct MockTransport {
    replies: Mutex<HashMap<(SocketAddr, String), ScriptedReply>>,
    sent: Mutex<Vec<(SocketAddr, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn on(&self, server: SocketAddr, domain: &str, response: Message) {
        self.script(server, domain, ScriptedReply::Message(response));
    }

    pub fn on_raw(&self, server: SocketAddr, domain: &str, bytes: Vec<u8>) {
        self.script(server, domain, ScriptedReply::Raw(bytes));
    }

    pub fn on_error(&self, server: SocketAddr, domain: &str, error: DomainError) {
        self.script(server, domain, ScriptedReply::Error(error));
    }

    fn script(&self, server: SocketAddr, domain: &str, reply: ScriptedReply) {
        self.replies
            .lock()
            .unwrap()
            .insert((server, normalize(domain)), reply);
    }

    /// Every query sent so far, in order, as (server, name without the
    /// trailing dot).
    pub fn sent(&self) -> Vec<(SocketAddr, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let query = Message::parse(message_bytes)?;
        let domain = query
            .questions
            .first()
            .map(|q| normalize(&q.name))
            .unwrap_or_default();

        self.sent.lock().unwrap().push((server, domain.clone()));

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&(server, domain.clone()))
            .cloned();

        let bytes = match reply {
            Some(ScriptedReply::Message(response)) => {
                ResponseBuilder::reply_to(message_bytes, &response)
            }
            Some(ScriptedReply::Raw(bytes)) => bytes,
            Some(ScriptedReply::Error(error)) => return Err(error),
            None => {
                return Err(DomainError::Transport {
                    server: server.to_string(),
                    reason: format!("no scripted reply for {}", domain),
                })
            }
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}
