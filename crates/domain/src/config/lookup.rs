use crate::doh_endpoints::{DohEndpointTable, DEFAULT_DOH_ENDPOINTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// IPv4 addresses of the thirteen root server identities (a through m).
pub const ROOT_HINTS: [&str; 13] = [
    "198.41.0.4",
    "170.247.170.2",
    "192.33.4.12",
    "199.7.91.13",
    "192.203.230.10",
    "192.5.5.241",
    "192.112.36.4",
    "198.97.190.53",
    "192.36.148.17",
    "192.58.128.30",
    "193.0.14.129",
    "199.7.83.42",
    "202.12.27.33",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Budget for one engine call, all sub-queries included.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Attempts per sub-query before a transport failure is reported.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Resolver IP → DNS-over-HTTPS endpoint. Keep in sync with the
    /// advertised resolver presets.
    #[serde(default = "default_doh_endpoints")]
    pub doh_endpoints: BTreeMap<String, String>,

    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Upper bound on delegations followed in authoritative mode.
    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn doh_table(&self) -> DohEndpointTable {
        DohEndpointTable::new(
            self.doh_endpoints
                .iter()
                .map(|(ip, url)| (ip.clone(), url.clone())),
        )
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
            doh_endpoints: default_doh_endpoints(),
            root_servers: default_root_servers(),
            max_referrals: default_max_referrals(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_retries() -> u32 {
    2
}

fn default_doh_endpoints() -> BTreeMap<String, String> {
    DEFAULT_DOH_ENDPOINTS
        .iter()
        .map(|(ip, url)| (ip.to_string(), url.to_string()))
        .collect()
}

fn default_root_servers() -> Vec<String> {
    ROOT_HINTS.iter().map(|ip| ip.to_string()).collect()
}

fn default_max_referrals() -> usize {
    16
}
