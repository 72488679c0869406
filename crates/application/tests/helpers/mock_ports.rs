use async_trait::async_trait;
use dns_lookup_application::ports::{DnsResolutionEngine, EngineOptions, EngineQuery, LookupApi};
use dns_lookup_domain::{DnsAnswer, DomainError, LookupRequest, LookupResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};

/// Engine double: answers every type with an empty answer, or with an
/// override registered for that type.
pub struct MockResolutionEngine {
    overrides: RwLock<Vec<DnsAnswer>>,
    failure: RwLock<Option<DomainError>>,
    calls: RwLock<Vec<(EngineOptions, EngineQuery)>>,
}

impl MockResolutionEngine {
    pub fn new() -> Self {
        Self {
            overrides: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_answer(&self, answer: DnsAnswer) {
        let mut overrides = self.overrides.write().await;
        overrides.retain(|a| a.queried_type != answer.queried_type);
        overrides.push(answer);
    }

    pub async fn set_failure(&self, error: DomainError) {
        *self.failure.write().await = Some(error);
    }

    pub async fn calls(&self) -> Vec<(EngineOptions, EngineQuery)> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

impl Default for MockResolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolutionEngine for MockResolutionEngine {
    async fn query(
        &self,
        options: &EngineOptions,
        query: &EngineQuery,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        self.calls
            .write()
            .await
            .push((options.clone(), query.clone()));

        if let Some(err) = self.failure.read().await.clone() {
            return Err(err);
        }

        let overrides = self.overrides.read().await;
        Ok(query
            .types
            .iter()
            .map(|t| {
                overrides
                    .iter()
                    .find(|a| &a.queried_type == t)
                    .cloned()
                    .unwrap_or_else(|| DnsAnswer::success(t.clone(), query.name.clone(), vec![]))
            })
            .collect())
    }
}

/// API double. When gated, every call parks until the gate is notified.
pub struct MockLookupApi {
    response: RwLock<Result<LookupResult, DomainError>>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl MockLookupApi {
    pub fn new(response: Result<LookupResult, DomainError>) -> Self {
        Self {
            response: RwLock::new(response),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(response: Result<LookupResult, DomainError>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(response)
        }
    }

    pub async fn set_response(&self, response: Result<LookupResult, DomainError>) {
        *self.response.write().await = response;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupApi for MockLookupApi {
    async fn lookup(&self, _request: &LookupRequest) -> Result<LookupResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response.read().await.clone()
    }
}
