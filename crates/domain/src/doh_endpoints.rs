use std::collections::BTreeMap;

/// Well-known resolvers and their DNS-over-HTTPS endpoints.
pub const DEFAULT_DOH_ENDPOINTS: [(&str, &str); 4] = [
    ("1.1.1.1", "https://cloudflare-dns.com/dns-query"),
    ("8.8.8.8", "https://dns.google/dns-query"),
    ("9.9.9.9", "https://dns.quad9.net/dns-query"),
    ("208.67.222.222", "https://doh.opendns.com/dns-query"),
];

/// Immutable mapping from resolver IP to its DoH endpoint URL.
///
/// Built once from configuration and shared behind an `Arc`; there is no way
/// to modify it after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohEndpointTable {
    endpoints: BTreeMap<String, String>,
}

impl DohEndpointTable {
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            endpoints: entries
                .into_iter()
                .map(|(ip, url)| (ip.into(), url.into()))
                .collect(),
        }
    }

    pub fn endpoint_for(&self, nameserver: &str) -> Option<&str> {
        self.endpoints.get(nameserver).map(String::as_str)
    }

    pub fn contains(&self, nameserver: &str) -> bool {
        self.endpoints.contains_key(nameserver)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.endpoints.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for DohEndpointTable {
    fn default() -> Self {
        Self::new(DEFAULT_DOH_ENDPOINTS)
    }
}

/// True when `value` looks like an absolute http(s) URL with a host part.
pub fn is_url(value: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .map(|rest| !rest.is_empty() && !rest.starts_with('/'))
            .unwrap_or(false)
    })
}
