use crate::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolve a textual `(domain, record type)` pair to an IPv4 address.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: &str,
    ) -> Result<DnsResolution, DomainError> {
        let record_type = RecordType::from_str(record_type)
            .map_err(|_| DomainError::UnsupportedRecordType(record_type.to_string()))?;

        let domain = domain.trim();
        if domain.is_empty() || domain == "." {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        let query = DnsQuery::new(domain, record_type);

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    address = %resolution.address,
                    answered_by = %resolution.answered_by,
                    queries = resolution.queries,
                    "Resolution complete"
                );
                Ok(resolution)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}
