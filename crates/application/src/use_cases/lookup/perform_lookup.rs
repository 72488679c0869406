use crate::ports::{DnsResolutionEngine, EngineOptions, EngineQuery};
use crate::services::ResolutionPlanner;
use dns_lookup_domain::{
    flatten_answers, AnswerError, DnsAnswer, DomainError, LookupQuery, LookupResult, Transport,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_LOOKUP_RETRIES: u32 = 2;
pub const AUTHORITATIVE_SERVER_LABEL: &str = "Root Servers (authoritative)";

pub struct PerformLookupUseCase {
    planner: Arc<ResolutionPlanner>,
    engine: Arc<dyn DnsResolutionEngine>,
    timeout: Duration,
    retries: u32,
}

impl PerformLookupUseCase {
    pub fn new(planner: Arc<ResolutionPlanner>, engine: Arc<dyn DnsResolutionEngine>) -> Self {
        Self {
            planner,
            engine,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
            retries: DEFAULT_LOOKUP_RETRIES,
        }
    }

    pub fn with_budget(mut self, timeout: Duration, retries: u32) -> Self {
        self.timeout = timeout;
        self.retries = retries;
        self
    }

    #[instrument(skip(self, query), fields(domain = %query.domain(), nameserver = %query.nameserver()))]
    pub async fn execute(&self, query: &LookupQuery) -> Result<LookupResult, DomainError> {
        let plan = self.planner.plan(query);

        // DoH without an endpoint must not fall through to some default server.
        if query.transport() == Transport::Doh && plan.target_server.is_none() {
            warn!(transport = %query.transport(), "No DoH endpoint for nameserver");
            return Err(DomainError::NoTargetServer {
                nameserver: query.nameserver().to_string(),
                transport: "DoH",
            });
        }

        let options = EngineOptions {
            transport: query.transport(),
            authoritative: plan.is_authoritative,
            timeout: self.timeout,
            retries: self.retries,
            flags: plan.flags,
            server: plan.target_server.clone(),
        };
        let engine_query = EngineQuery {
            name: query.domain().to_string(),
            types: plan.effective_types,
        };

        debug!(
            types = ?engine_query.types,
            flags = ?options.flags,
            server = ?options.server,
            "Dispatching lookup to resolution engine"
        );

        let start = Instant::now();
        let answers = self.engine.query(&options, &engine_query).await?;
        let query_time = start.elapsed().as_millis() as u64;

        if let Some(error) = first_answer_error(&answers) {
            warn!(code = %error.code, message = %error.message, "Sub-query failed");
            return Err(DomainError::Resolution(error.message.clone()));
        }

        let records = flatten_answers(&answers);
        let server = if plan.is_authoritative {
            AUTHORITATIVE_SERVER_LABEL.to_string()
        } else {
            query.nameserver().to_string()
        };

        info!(
            records = records.len(),
            answers = answers.len(),
            query_time_ms = query_time,
            "Lookup completed"
        );

        Ok(LookupResult {
            records,
            query_time,
            server,
            raw_data: answers,
        })
    }
}

fn first_answer_error(answers: &[DnsAnswer]) -> Option<&AnswerError> {
    answers.iter().find_map(|answer| answer.error.as_ref())
}
