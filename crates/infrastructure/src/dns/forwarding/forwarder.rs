use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::UpstreamTransport;
use dns_lookup_domain::{DomainError, QueryFlags};
use hickory_proto::rr::RecordType;
use std::time::Duration;
use tracing::{debug, warn};

/// Sends one question to one upstream, retrying transport failures.
pub struct DnsForwarder;

impl DnsForwarder {
    /// `attempts` is the total number of tries; zero is treated as one.
    ///
    /// Name errors surface before any I/O as `InvalidDomainName`. Every other
    /// error is from the last attempt.
    pub async fn query(
        transport: &UpstreamTransport,
        domain: &str,
        record_type: RecordType,
        flags: QueryFlags,
        timeout: Duration,
        attempts: u32,
    ) -> Result<DnsResponse, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query(domain, record_type, flags)?;
        let server = transport.server();
        let attempts = attempts.max(1);

        let mut last_error = None;
        for attempt in 1..=attempts {
            match Self::exchange(transport, &server, id, &request_bytes, timeout).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(
                        server = %server,
                        protocol = transport.protocol_name(),
                        attempt,
                        attempts,
                        error = %e,
                        "DNS exchange failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DomainError::Transport {
            server,
            reason: "no attempt was made".to_string(),
        }))
    }

    async fn exchange(
        transport: &UpstreamTransport,
        server: &str,
        id: u16,
        request_bytes: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let response = transport.send(request_bytes, timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, server)?;

        if parsed.id != id {
            return Err(DomainError::Transport {
                server: server.to_string(),
                reason: format!("response ID {} does not match query ID {}", parsed.id, id),
            });
        }

        debug!(
            server = %server,
            protocol = response.protocol_used,
            rcode = parsed.status(),
            "DNS exchange completed"
        );

        Ok(parsed)
    }
}
