use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{IterativeResolver, ResolverSettings, UdpTransport};
use std::sync::Arc;
use tracing::info;

pub struct Services {
    pub resolve_domain: ResolveDomainUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let settings = ResolverSettings::from_config(config)?;
        let transport = Arc::new(UdpTransport::with_buffer_size(
            config.resolver.recv_buffer_size,
        ));

        info!(
            root = %settings.root_server,
            timeout_ms = config.resolver.query_timeout_ms,
            recv_buffer_size = config.resolver.recv_buffer_size,
            "Initializing resolver"
        );

        let resolver = Arc::new(IterativeResolver::new(transport, settings));

        Ok(Self {
            resolve_domain: ResolveDomainUseCase::new(resolver),
        })
    }
}
