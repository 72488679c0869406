use crate::{dto::ResolverPresetDto, state::AppState};
use axum::{extract::State, Json};
use dns_lookup_domain::RESOLVER_PRESETS;

pub async fn list_resolvers(State(state): State<AppState>) -> Json<Vec<ResolverPresetDto>> {
    Json(
        RESOLVER_PRESETS
            .iter()
            .map(|preset| ResolverPresetDto::from_preset(preset, &state.doh_endpoints))
            .collect(),
    )
}
