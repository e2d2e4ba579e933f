#![allow(dead_code)]
use super::builders::ResponseBuilder;
use rootwalk_infrastructure::dns::Message;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the loopback server answers each query.
#[derive(Clone)]
pub enum ServerBehavior {
    /// Answer with an A record for whatever name was asked.
    Answer(Ipv4Addr),
    /// Reply with a fixed message, echoing the query's id and question.
    Respond(Message),
    /// Answer, but with the transaction id flipped.
    WrongId(Ipv4Addr),
    /// Send back these bytes unchanged.
    Raw(Vec<u8>),
    /// Never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: ServerBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(behavior: &ServerBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            ServerBehavior::Answer(address) => Some(Self::answer(query, *address)),
            ServerBehavior::Respond(message) => Some(ResponseBuilder::reply_to(query, message)),
            ServerBehavior::WrongId(address) => {
                let mut response = Self::answer(query, *address);
                response[0] ^= 0xFF;
                Some(response)
            }
            ServerBehavior::Raw(bytes) => Some(bytes.clone()),
            ServerBehavior::Silent => None,
        }
    }

    fn answer(query: &[u8], address: Ipv4Addr) -> Vec<u8> {
        let name = Message::parse(query)
            .ok()
            .and_then(|q| q.questions.first().map(|q| q.name.clone()))
            .unwrap_or_else(|| ".".to_string());
        let response = ResponseBuilder::new()
            .authoritative()
            .answer(&name, address)
            .build();
        ResponseBuilder::reply_to(query, &response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
