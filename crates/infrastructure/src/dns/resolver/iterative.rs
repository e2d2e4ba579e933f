//! Iterative resolution from a root nameserver.
//!
//! Each round sends one non-recursive query and acts on the reply, in this
//! order of preference:
//!
//! 1. an answer record of the queried type ends the walk, with its address
//!    when it is an A record and with `NonAddressAnswer` otherwise
//! 2. an A record in the additional section (glue) names the next server
//! 3. an NS record in the authority section names the next server by
//!    hostname, which is first resolved with a nested walk from the root
//! 4. otherwise the walk fails with `NoAnswerFound`
//!
//! All queries of one resolution, nested ones included, draw on a single
//! budget, and nesting is capped, so a delegation cycle always ends in an
//! error.

use crate::dns::codec::{Message, ResourceRecord, ResponseCode};
use crate::dns::message_builder::MessageBuilder;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::ResolverSettings;

/// What a single response tells the walk to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Answer(Ipv4Addr),
    NonAddressAnswer(RecordType),
    NxDomain,
    Glue(Ipv4Addr),
    Delegate(String),
    NoAnswer,
}

impl NextStep {
    pub fn from_response(message: &Message, record_type: RecordType) -> Self {
        let mut answers = message.answers_for(record_type).peekable();
        if answers.peek().is_some() {
            return match answers.find_map(ResourceRecord::ipv4) {
                Some(address) => NextStep::Answer(address),
                None => NextStep::NonAddressAnswer(record_type),
            };
        }
        if message.header.response_code() == ResponseCode::NxDomain {
            return NextStep::NxDomain;
        }
        if let Some(address) = message.glue_ipv4() {
            return NextStep::Glue(address);
        }
        if let Some(nameserver) = message.referral_nameserver() {
            let hostname = nameserver.strip_suffix('.').unwrap_or(nameserver);
            if !hostname.is_empty() {
                return NextStep::Delegate(hostname.to_string());
            }
        }
        NextStep::NoAnswer
    }
}

/// Queries left for one top-level resolution.
struct QueryBudget {
    limit: u32,
    used: u32,
}

impl QueryBudget {
    fn new(limit: u32) -> Self {
        Self { limit, used: 0 }
    }

    fn spend(&mut self, domain: &str) -> Result<(), DomainError> {
        if self.used >= self.limit {
            return Err(DomainError::ReferralLimitExceeded {
                domain: domain.to_string(),
                limit: self.limit,
            });
        }
        self.used += 1;
        Ok(())
    }
}

pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    settings: ResolverSettings,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, settings: ResolverSettings) -> Self {
        info!(
            root = %settings.root_server,
            protocol = transport.protocol_name(),
            max_queries = settings.max_queries,
            max_ns_depth = settings.max_ns_depth,
            "Iterative resolver created"
        );

        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Walk the delegation tree for `domain` and return the first IPv4
    /// address found in an answer section.
    pub async fn resolve_ipv4(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResolution, DomainError> {
        let mut budget = QueryBudget::new(self.settings.max_queries);
        let (address, answered_by) = self
            .walk(domain.to_string(), record_type, 0, &mut budget)
            .await?;

        Ok(DnsResolution::new(address, answered_by, budget.used))
    }

    fn walk<'a>(
        &'a self,
        domain: String,
        record_type: RecordType,
        depth: u8,
        budget: &'a mut QueryBudget,
    ) -> BoxFuture<'a, Result<(Ipv4Addr, SocketAddr), DomainError>> {
        async move {
            let mut server = self.settings.root_server;
            let mut visited = HashSet::new();

            loop {
                if !visited.insert(server) {
                    return Err(DomainError::ReferralLoop {
                        domain,
                        server: server.to_string(),
                    });
                }

                budget.spend(&domain)?;
                let response = self.query(server, &domain, record_type).await?;

                match NextStep::from_response(&response, record_type) {
                    NextStep::Answer(address) => {
                        debug!(domain = %domain, server = %server, address = %address, "Answer found");
                        return Ok((address, server));
                    }
                    NextStep::NonAddressAnswer(answered_type) => {
                        debug!(domain = %domain, server = %server, record_type = %answered_type, "Answer holds no A record");
                        return Err(DomainError::NonAddressAnswer {
                            domain,
                            record_type: answered_type.to_string(),
                        });
                    }
                    NextStep::NxDomain => {
                        return Err(DomainError::NxDomain { domain });
                    }
                    NextStep::Glue(address) => {
                        debug!(domain = %domain, server = %server, next = %address, "Following referral with glue");
                        server = self.nameserver_addr(address);
                    }
                    NextStep::Delegate(hostname) => {
                        if depth >= self.settings.max_ns_depth {
                            return Err(DomainError::ReferralDepthExceeded {
                                domain,
                                limit: self.settings.max_ns_depth,
                            });
                        }

                        debug!(
                            domain = %domain,
                            server = %server,
                            nameserver = %hostname,
                            depth = depth + 1,
                            "Referral without glue, resolving nameserver"
                        );
                        let (address, _) = self
                            .walk(hostname, RecordType::A, depth + 1, &mut *budget)
                            .await?;
                        server = self.nameserver_addr(address);
                    }
                    NextStep::NoAnswer => {
                        debug!(
                            domain = %domain,
                            server = %server,
                            rcode = response.header.response_code().as_str(),
                            "Response has no answer and no referral"
                        );
                        return Err(DomainError::NoAnswerFound { domain });
                    }
                }
            }
        }
        .boxed()
    }

    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(domain, &record_type)?;

        debug!(
            server = %server,
            domain = %domain,
            record_type = %record_type,
            id = id,
            "Querying nameserver"
        );

        let response = self
            .transport
            .send(server, &bytes, self.settings.query_timeout)
            .await?;
        let message = Message::parse(&response.bytes)?;

        if message.header.truncated() {
            warn!(
                server = %server,
                domain = %domain,
                "Truncated response, using the records received"
            );
        }

        Ok(message)
    }

    fn nameserver_addr(&self, address: Ipv4Addr) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(address), self.settings.port)
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            root = %self.settings.root_server,
            "IterativeResolver: starting referral walk"
        );

        self.resolve_ipv4(&query.domain, query.record_type)
            .await
    }
}
