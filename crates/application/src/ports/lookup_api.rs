use async_trait::async_trait;
use dns_lookup_domain::{DomainError, LookupRequest, LookupResult};

/// Client-side access to the lookup endpoint.
#[async_trait]
pub trait LookupApi: Send + Sync {
    /// Non-2xx responses come back as [`DomainError::Api`] carrying the
    /// server's message.
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DomainError>;
}
