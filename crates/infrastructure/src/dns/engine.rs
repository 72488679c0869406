use crate::dns::forwarding::{DnsForwarder, RecordTypeMapper};
use crate::dns::iterative::IterativeResolver;
use crate::dns::record_format::{answer_from_error, answer_from_response};
use crate::dns::transport::{create_transport, UpstreamTransport};
use async_trait::async_trait;
use dns_lookup_application::ports::{DnsResolutionEngine, EngineOptions, EngineQuery};
use dns_lookup_domain::{DnsAnswer, DomainError};
use futures::future::join_all;
use tracing::{debug, info, instrument};

/// Wire-level resolution engine built on `hickory-proto` messages.
///
/// Recursive lookups go to a single upstream over TCP or DoH; authoritative
/// lookups walk down from the root servers. Sub-queries run concurrently and
/// the whole call shares one deadline.
pub struct HickoryResolutionEngine {
    iterative: IterativeResolver,
}

impl HickoryResolutionEngine {
    pub fn new(iterative: IterativeResolver) -> Self {
        Self { iterative }
    }

    async fn run(
        &self,
        options: &EngineOptions,
        query: &EngineQuery,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        let upstream = if options.authoritative {
            None
        } else {
            let server = options.server.as_deref().ok_or_else(|| {
                DomainError::Resolution("No nameserver given for recursive lookup".to_string())
            })?;
            Some(create_transport(options.transport, server).await?)
        };

        let sub_queries = query.types.iter().map(|record_type| {
            self.query_type(options, upstream.as_ref(), &query.name, record_type)
        });

        join_all(sub_queries).await.into_iter().collect()
    }

    async fn query_type(
        &self,
        options: &EngineOptions,
        upstream: Option<&UpstreamTransport>,
        domain: &str,
        queried_type: &str,
    ) -> Result<DnsAnswer, DomainError> {
        let record_type = match RecordTypeMapper::parse(queried_type) {
            Ok(record_type) => record_type,
            Err(e) => return Ok(answer_from_error(queried_type, domain, &e)),
        };

        let outcome = match upstream {
            Some(transport) => DnsForwarder::query(
                transport,
                domain,
                record_type,
                options.flags,
                options.timeout,
                options.retries,
            )
            .await
            .map(|response| (response, transport.server())),
            None => self
                .iterative
                .resolve(
                    domain,
                    record_type,
                    options.flags,
                    options.timeout,
                    options.retries,
                )
                .await
                .map(|answer| (answer.response, answer.server.to_string())),
        };

        match outcome {
            Ok((response, server)) => {
                debug!(
                    record_type = queried_type,
                    server = %server,
                    rcode = response.status(),
                    answers = response.answers.len(),
                    "Sub-query answered"
                );
                Ok(answer_from_response(
                    queried_type,
                    domain,
                    Some(&server),
                    &response,
                ))
            }
            Err(e) if e.is_transport_error() => Err(e),
            Err(e) => Ok(answer_from_error(queried_type, domain, &e)),
        }
    }
}

#[async_trait]
impl DnsResolutionEngine for HickoryResolutionEngine {
    #[instrument(skip(self, options, query), fields(name = %query.name, transport = %options.transport))]
    async fn query(
        &self,
        options: &EngineOptions,
        query: &EngineQuery,
    ) -> Result<Vec<DnsAnswer>, DomainError> {
        let timeout_ms = options.timeout.as_millis() as u64;

        let answers = tokio::time::timeout(options.timeout, self.run(options, query))
            .await
            .map_err(|_| DomainError::QueryTimeout { timeout_ms })??;

        info!(
            types = query.types.len(),
            authoritative = options.authoritative,
            "Engine call completed"
        );

        Ok(answers)
    }
}
