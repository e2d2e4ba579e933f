mod builders;
mod dns_server_mock;
mod mock_transport;

pub use builders::{fqdn, server, ResponseBuilder};
pub use dns_server_mock::{MockDnsServer, ServerBehavior};
pub use mock_transport::{MockTransport, ScriptedReply};
