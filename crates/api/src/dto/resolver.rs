use dns_lookup_domain::{DohEndpointTable, ResolverPreset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverPresetDto {
    pub value: String,
    pub label: String,
    pub doh_available: bool,
}

impl ResolverPresetDto {
    pub fn from_preset(preset: &ResolverPreset, doh_endpoints: &DohEndpointTable) -> Self {
        Self {
            value: preset.value.to_string(),
            label: preset.label.to_string(),
            doh_available: doh_endpoints.contains(preset.value),
        }
    }
}
