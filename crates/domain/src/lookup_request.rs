use crate::{DomainError, LookupQuery, Transport};
use serde::{Deserialize, Serialize};

/// JSON body accepted by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub domain: String,
    pub nameserver: String,
    pub record_types: Vec<String>,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub transport: Transport,
}

impl LookupRequest {
    pub fn into_query(self) -> Result<LookupQuery, DomainError> {
        LookupQuery::new(
            self.domain,
            self.nameserver,
            self.record_types,
            self.dnssec,
            self.transport,
        )
    }
}
