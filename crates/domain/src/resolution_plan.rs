use serde::{Serialize, Serializer};
use std::fmt;

/// Record types appended to every DNSSEC lookup.
pub const DNSSEC_RECORD_TYPES: [&str; 3] = ["DNSKEY", "DS", "RRSIG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QueryFlag {
    /// Recursion desired.
    RD,
    /// DNSSEC OK (EDNS0 DO bit).
    DO,
}

impl QueryFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFlag::RD => "RD",
            QueryFlag::DO => "DO",
        }
    }
}

impl fmt::Display for QueryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of header/EDNS flags sent with every sub-query.
///
/// Only two flags exist, so the set is two booleans; iteration yields them in
/// `RD, DO` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueryFlags {
    recursion_desired: bool,
    dnssec_ok: bool,
}

impl QueryFlags {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, flag: QueryFlag) -> Self {
        match flag {
            QueryFlag::RD => self.recursion_desired = true,
            QueryFlag::DO => self.dnssec_ok = true,
        }
        self
    }

    pub fn contains(&self, flag: QueryFlag) -> bool {
        match flag {
            QueryFlag::RD => self.recursion_desired,
            QueryFlag::DO => self.dnssec_ok,
        }
    }

    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    pub fn dnssec_ok(&self) -> bool {
        self.dnssec_ok
    }

    pub fn is_empty(&self) -> bool {
        !self.recursion_desired && !self.dnssec_ok
    }

    pub fn iter(&self) -> impl Iterator<Item = QueryFlag> + '_ {
        [QueryFlag::RD, QueryFlag::DO]
            .into_iter()
            .filter(|flag| self.contains(*flag))
    }
}

impl FromIterator<QueryFlag> for QueryFlags {
    fn from_iter<I: IntoIterator<Item = QueryFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl Serialize for QueryFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Concrete dispatch parameters derived from a [`crate::LookupQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionPlan {
    pub is_authoritative: bool,
    pub flags: QueryFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_server: Option<String>,
    pub effective_types: Vec<String>,
}
