use async_trait::async_trait;
use dns_lookup_application::ports::LookupApi;
use dns_lookup_domain::{DomainError, LookupRequest, LookupResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const LOOKUP_PATH: &str = "/api/dns/lookup";
pub const DEFAULT_FAILURE_MESSAGE: &str = "DNS lookup failed";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Calls a running server's lookup endpoint.
pub struct HttpLookupClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpLookupClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), LOOKUP_PATH),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LookupApi for HttpLookupClient {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        debug!(endpoint = %self.endpoint, domain = %request.domain, "Posting lookup request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                server: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            warn!(status = status.as_u16(), message = %message, "Lookup request rejected");
            return Err(DomainError::Api(message));
        }

        response
            .json::<LookupResult>()
            .await
            .map_err(|e| DomainError::Api(format!("Malformed lookup response: {}", e)))
    }
}
