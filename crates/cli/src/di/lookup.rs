use dns_lookup_application::services::ResolutionPlanner;
use dns_lookup_application::use_cases::PerformLookupUseCase;
use dns_lookup_domain::{Config, DohEndpointTable};
use dns_lookup_infrastructure::dns::{HickoryResolutionEngine, IterativeResolver};
use std::sync::Arc;
use tracing::{info, warn};

pub struct LookupServices {
    pub doh_endpoints: Arc<DohEndpointTable>,
    pub perform_lookup: Arc<PerformLookupUseCase>,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        let doh_endpoints = Arc::new(config.lookup.doh_table());
        let planner = Arc::new(ResolutionPlanner::new(Arc::clone(&doh_endpoints)));

        let iterative = IterativeResolver::from_hints(
            config.lookup.root_servers.as_slice(),
            config.lookup.max_referrals,
        );
        if iterative.root_servers().len() != config.lookup.root_servers.len() {
            warn!("Some root server hints could not be parsed and were skipped");
        }
        let engine = Arc::new(HickoryResolutionEngine::new(iterative));

        let perform_lookup = Arc::new(
            PerformLookupUseCase::new(planner, engine)
                .with_budget(config.lookup.timeout(), config.lookup.retries),
        );

        info!(
            doh_endpoints = doh_endpoints.len(),
            root_servers = config.lookup.root_servers.len(),
            max_referrals = config.lookup.max_referrals,
            "Lookup services initialized"
        );

        Self {
            doh_endpoints,
            perform_lookup,
        }
    }
}
