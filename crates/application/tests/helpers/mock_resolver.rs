#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolution, DnsResolver};
use rootwalk_domain::{DnsQuery, DomainError, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Result<DnsResolution, DomainError>>>>,
    received: Arc<RwLock<Vec<(String, RecordType)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, resolution: DnsResolution) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Ok(resolution));
    }

    pub async fn set_response_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Err(error));
    }

    pub async fn received(&self) -> Vec<(String, RecordType)> {
        self.received.read().await.clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.received
            .write()
            .await
            .push((query.domain.to_string(), query.record_type));

        self.responses
            .read()
            .await
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::NoAnswerFound {
                    domain: query.domain.to_string(),
                })
            })
    }
}
