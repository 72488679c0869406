use serde::{Deserialize, Serialize};

/// A flattened, presentation-ready resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl DnsRecord {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        ttl: Option<u32>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerError {
    /// Response code or failure class, e.g. `SERVFAIL`, `NXDOMAIN`, `FORMERR`.
    pub code: String,
    pub message: String,
}

impl AnswerError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The engine's answer for a single queried record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsAnswer {
    pub queried_type: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AnswerError>,
}

impl DnsAnswer {
    pub fn success(
        queried_type: impl Into<String>,
        domain: impl Into<String>,
        records: Vec<DnsRecord>,
    ) -> Self {
        Self {
            queried_type: queried_type.into(),
            domain: domain.into(),
            server: None,
            records,
            error: None,
        }
    }

    pub fn failure(
        queried_type: impl Into<String>,
        domain: impl Into<String>,
        error: AnswerError,
    ) -> Self {
        Self {
            queried_type: queried_type.into(),
            domain: domain.into(),
            server: None,
            records: Vec::new(),
            error: Some(error),
        }
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Response contract of the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub records: Vec<DnsRecord>,
    pub query_time: u64,
    pub server: String,
    pub raw_data: Vec<DnsAnswer>,
}

/// Concatenates every answer's records, answer order first, then record order.
pub fn flatten_answers(answers: &[DnsAnswer]) -> Vec<DnsRecord> {
    answers
        .iter()
        .flat_map(|answer| answer.records.iter().cloned())
        .collect()
}
