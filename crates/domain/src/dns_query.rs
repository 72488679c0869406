use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Nameserver value that asks for iterative resolution from the root servers.
pub const AUTHORITATIVE_NAMESERVER: &str = "authoritative";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Tcp,
    Doh,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Doh => "doh",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Transport::Tcp),
            "doh" => Ok(Transport::Doh),
            other => Err(DomainError::InvalidQuery(format!(
                "unsupported transport '{}'",
                other
            ))),
        }
    }
}

/// A validated lookup request. Fields are only reachable through accessors so
/// a query cannot be mutated once [`LookupQuery::new`] has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    domain: Arc<str>,
    nameserver: Arc<str>,
    record_types: Vec<String>,
    dnssec: bool,
    transport: Transport,
}

impl LookupQuery {
    pub fn new(
        domain: impl Into<Arc<str>>,
        nameserver: impl Into<Arc<str>>,
        record_types: Vec<String>,
        dnssec: bool,
        transport: Transport,
    ) -> Result<Self, DomainError> {
        let domain = domain.into();
        let nameserver = nameserver.into();

        if domain.is_empty() {
            return Err(DomainError::InvalidQuery("domain is empty".to_string()));
        }
        if nameserver.is_empty() {
            return Err(DomainError::InvalidQuery("nameserver is empty".to_string()));
        }
        if record_types.is_empty() {
            return Err(DomainError::InvalidQuery(
                "at least one record type is required".to_string(),
            ));
        }

        let mut unique: Vec<String> = Vec::with_capacity(record_types.len());
        for record_type in record_types {
            if !unique.contains(&record_type) {
                unique.push(record_type);
            }
        }

        Ok(Self {
            domain,
            nameserver,
            record_types: unique,
            dnssec,
            transport,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn nameserver(&self) -> &str {
        &self.nameserver
    }

    pub fn record_types(&self) -> &[String] {
        &self.record_types
    }

    pub fn dnssec(&self) -> bool {
        self.dnssec
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn is_authoritative(&self) -> bool {
        self.nameserver.as_ref() == AUTHORITATIVE_NAMESERVER
    }
}
