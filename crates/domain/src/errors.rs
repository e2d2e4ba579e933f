use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Response id mismatch: expected {expected:#06x}, received {received:#06x}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("Cannot encode DNS message: {0}")]
    EncodeError(String),

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("No answer found for {domain}")]
    NoAnswerFound { domain: String },

    #[error("{record_type} answer for {domain} carries no IPv4 address")]
    NonAddressAnswer { domain: String, record_type: String },

    #[error("Domain not found (NXDOMAIN): {domain}")]
    NxDomain { domain: String },

    #[error("Referral limit exceeded resolving {domain}: {limit} queries sent without an answer")]
    ReferralLimitExceeded { domain: String, limit: u32 },

    #[error("Referral loop resolving {domain}: {server} was already asked")]
    ReferralLoop { domain: String, server: String },

    #[error("Nameserver lookup depth exceeded resolving {domain}: limit {limit}")]
    ReferralDepthExceeded { domain: String, limit: u8 },
}

impl DomainError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DomainError::MalformedResponse(reason.into())
    }

    /// Failures of the referral walk itself rather than of a single exchange.
    pub fn is_unbounded_walk(&self) -> bool {
        matches!(
            self,
            DomainError::ReferralLimitExceeded { .. }
                | DomainError::ReferralLoop { .. }
                | DomainError::ReferralDepthExceeded { .. }
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. }
                | DomainError::QueryTimeout { .. }
                | DomainError::ResponseIdMismatch { .. }
        )
    }
}
