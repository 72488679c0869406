use crate::{errors::ApiError, state::AppState};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use dns_lookup_domain::{DomainError, LookupRequest, LookupResult};
use tracing::{debug, error, instrument, warn};

/// The body is decoded as JSON whatever its `Content-Type`.
#[instrument(skip(state, body), name = "api_perform_lookup")]
pub async fn perform_lookup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LookupResult>, ApiError> {
    let request: LookupRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected lookup request body");
        DomainError::InvalidQuery(e.to_string())
    })?;

    let query = request.into_query().inspect_err(|e| {
        warn!(error = %e, "Lookup request failed validation");
    })?;

    debug!(
        domain = %query.domain(),
        nameserver = %query.nameserver(),
        transport = %query.transport(),
        dnssec = query.dnssec(),
        "Performing lookup"
    );

    match state.perform_lookup.execute(&query).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(error = %e, "DNS lookup error");
            Err(ApiError(e))
        }
    }
}

/// CORS pre-flight; no headers are added.
pub async fn lookup_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
