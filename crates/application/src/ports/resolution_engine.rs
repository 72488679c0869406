use async_trait::async_trait;
use dns_lookup_domain::{DnsAnswer, DomainError, QueryFlags, Transport};
use std::time::Duration;

/// Dispatch parameters handed to the engine for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    pub transport: Transport,
    /// Resolve iteratively from the root servers instead of asking `server`.
    pub authoritative: bool,
    pub timeout: Duration,
    /// Attempts per sub-query.
    pub retries: u32,
    pub flags: QueryFlags,
    /// Resolver address (TCP) or endpoint URL (DoH). Absent in authoritative
    /// mode.
    pub server: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineQuery {
    pub name: String,
    pub types: Vec<String>,
}

/// The DNS resolution engine: one call per lookup, one answer per requested
/// type, in request order.
///
/// Per-type failures (bad name, SERVFAIL, unknown type) are reported inside
/// the matching [`DnsAnswer`]; `Err` is reserved for failures of the call
/// itself, e.g. an unreachable server or an exhausted timeout.
#[async_trait]
pub trait DnsResolutionEngine: Send + Sync {
    async fn query(
        &self,
        options: &EngineOptions,
        query: &EngineQuery,
    ) -> Result<Vec<DnsAnswer>, DomainError>;
}
