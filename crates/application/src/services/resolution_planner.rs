use dns_lookup_domain::doh_endpoints::is_url;
use dns_lookup_domain::{
    DohEndpointTable, LookupQuery, QueryFlag, QueryFlags, ResolutionPlan, Transport,
    DNSSEC_RECORD_TYPES,
};
use std::sync::Arc;

/// Turns a validated query into dispatch parameters. Pure: the same query
/// always yields the same plan.
#[derive(Debug, Clone)]
pub struct ResolutionPlanner {
    doh_endpoints: Arc<DohEndpointTable>,
}

impl ResolutionPlanner {
    pub fn new(doh_endpoints: Arc<DohEndpointTable>) -> Self {
        Self { doh_endpoints }
    }

    pub fn doh_endpoints(&self) -> &DohEndpointTable {
        &self.doh_endpoints
    }

    pub fn plan(&self, query: &LookupQuery) -> ResolutionPlan {
        let is_authoritative = query.is_authoritative();

        ResolutionPlan {
            is_authoritative,
            flags: Self::flags(is_authoritative, query.dnssec()),
            target_server: self.target_server(query, is_authoritative),
            effective_types: Self::effective_types(query),
        }
    }

    fn flags(is_authoritative: bool, dnssec: bool) -> QueryFlags {
        let mut flags = QueryFlags::empty();
        if !is_authoritative {
            flags = flags.with(QueryFlag::RD);
        }
        if dnssec {
            flags = flags.with(QueryFlag::DO);
        }
        flags
    }

    fn target_server(&self, query: &LookupQuery, is_authoritative: bool) -> Option<String> {
        if is_authoritative {
            return None;
        }

        let nameserver = query.nameserver();
        match query.transport() {
            Transport::Tcp => Some(nameserver.to_string()),
            Transport::Doh => match self.doh_endpoints.endpoint_for(nameserver) {
                Some(url) => Some(url.to_string()),
                None if is_url(nameserver) => Some(nameserver.to_string()),
                None => None,
            },
        }
    }

    fn effective_types(query: &LookupQuery) -> Vec<String> {
        let mut types = query.record_types().to_vec();
        if query.dnssec() {
            types.extend(DNSSEC_RECORD_TYPES.iter().map(|t| t.to_string()));
        }
        types
    }
}

impl Default for ResolutionPlanner {
    fn default() -> Self {
        Self::new(Arc::new(DohEndpointTable::default()))
    }
}
