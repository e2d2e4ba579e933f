#![allow(dead_code)]
use rootwalk_infrastructure::dns::{Header, Message, ResourceRecord};
use std::net::{Ipv4Addr, SocketAddr};

const TTL: u32 = 172800;

/// Builds the responses a nameserver would send during a walk.
///
/// The id and question are filled in by whoever replies, so only the
/// sections are set here.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            message: Message {
                header: Header {
                    flags: 0x8000,
                    ..Header::default()
                },
                ..Message::default()
            },
        }
    }

    pub fn answer(mut self, name: &str, address: Ipv4Addr) -> Self {
        self.message
            .answers
            .push(ResourceRecord::a(fqdn(name), 300, address));
        self
    }

    pub fn delegate(mut self, zone: &str, nameserver: &str) -> Self {
        self.message
            .authorities
            .push(ResourceRecord::ns(fqdn(zone), TTL, fqdn(nameserver)));
        self
    }

    pub fn glue(mut self, nameserver: &str, address: Ipv4Addr) -> Self {
        self.message
            .additionals
            .push(ResourceRecord::a(fqdn(nameserver), TTL, address));
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.message.header.flags |= 0x0400;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.message.header.flags |= 0x0200;
        self
    }

    pub fn nxdomain(mut self) -> Self {
        self.message.header.flags = (self.message.header.flags & !0x000F) | 3;
        self
    }

    pub fn build(self) -> Message {
        self.message
    }

    /// Reply to `query` with this response's sections.
    pub fn reply_to(query: &[u8], response: &Message) -> Vec<u8> {
        let query = Message::parse(query).expect("mock received an undecodable query");
        let reply = Message {
            header: Header {
                id: query.header.id,
                ..response.header
            },
            questions: query.questions,
            ..response.clone()
        };
        reply.pack().expect("mock response must encode")
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

pub fn server(ip: [u8; 4]) -> SocketAddr {
    SocketAddr::from((ip, 53))
}
