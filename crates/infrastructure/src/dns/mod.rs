pub mod codec;
pub mod message_builder;
pub mod resolver;
pub mod transport;

pub use codec::{Header, Message, Question, RData, ResourceRecord, ResponseCode};
pub use message_builder::MessageBuilder;
pub use resolver::{IterativeResolver, ResolverSettings};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
