use dns_lookup_application::use_cases::PerformLookupUseCase;
use dns_lookup_domain::DohEndpointTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub perform_lookup: Arc<PerformLookupUseCase>,
    pub doh_endpoints: Arc<DohEndpointTable>,
}
