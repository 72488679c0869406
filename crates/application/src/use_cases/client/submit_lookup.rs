use crate::ports::LookupApi;
use dns_lookup_domain::{ClientQueryState, DomainError, LookupRequest, LookupResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, warn};

pub const CANCELLED_MESSAGE: &str = "Lookup was cancelled before it completed";

/// Drives [`ClientQueryState`] through one submission at a time.
pub struct SubmitLookupUseCase {
    api: Arc<dyn LookupApi>,
    state: Mutex<ClientQueryState>,
}

/// Settles the loading cycle it was created for. Dropped unsettled (the
/// `execute` future was cancelled) it fails the cycle so the gate reopens.
struct InFlight<'a> {
    state: &'a Mutex<ClientQueryState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, apply: impl FnOnce(&mut ClientQueryState)) {
        self.settled = true;
        apply(&mut lock(self.state));
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Lookup dropped while in flight");
            lock(self.state).fail(CANCELLED_MESSAGE);
        }
    }
}

/// The state is never locked across an await, so a poisoned lock still
/// holds a consistent value.
fn lock(state: &Mutex<ClientQueryState>) -> MutexGuard<'_, ClientQueryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SubmitLookupUseCase {
    pub fn new(api: Arc<dyn LookupApi>) -> Self {
        Self {
            api,
            state: Mutex::new(ClientQueryState::new()),
        }
    }

    /// Fails with [`DomainError::QueryInFlight`] without calling the API when
    /// a previous submission has not finished.
    pub async fn execute(&self, request: LookupRequest) -> Result<LookupResult, DomainError> {
        lock(&self.state).begin(&request)?;
        let cycle = InFlight {
            state: &self.state,
            settled: false,
        };
        debug!(domain = %request.domain, nameserver = %request.nameserver, "Submitting lookup");

        match self.api.lookup(&request).await {
            Ok(result) => {
                cycle.settle(|state| {
                    state.succeed(result.clone());
                });
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, "DNS lookup error");
                cycle.settle(|state| {
                    state.fail(e.to_string());
                });
                Err(e)
            }
        }
    }

    pub async fn state(&self) -> ClientQueryState {
        lock(&self.state).clone()
    }

    pub async fn is_loading(&self) -> bool {
        lock(&self.state).is_loading()
    }

    /// One-shot failure notification; `None` once it has been shown.
    pub async fn take_notification(&self) -> Option<String> {
        lock(&self.state).take_notification()
    }
}
