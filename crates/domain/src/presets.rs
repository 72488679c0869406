use crate::dns_query::AUTHORITATIVE_NAMESERVER;

/// Nameserver value that tells the form to read a free-text server instead.
pub const CUSTOM_NAMESERVER: &str = "custom";

pub const DEFAULT_NAMESERVER: &str = "8.8.8.8";

pub const EXAMPLE_DOMAINS: [&str; 3] = ["cloudflare.com", "wikipedia.org", "x.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverPreset {
    pub value: &'static str,
    pub label: &'static str,
}

/// Resolvers offered for selection. 1.1.1.1 has a DoH endpoint but is not
/// advertised.
pub const RESOLVER_PRESETS: [ResolverPreset; 5] = [
    ResolverPreset {
        value: "8.8.8.8",
        label: "Google (8.8.8.8)",
    },
    ResolverPreset {
        value: "9.9.9.9",
        label: "Quad9 (9.9.9.9)",
    },
    ResolverPreset {
        value: "208.67.222.222",
        label: "OpenDNS (208.67.222.222)",
    },
    ResolverPreset {
        value: AUTHORITATIVE_NAMESERVER,
        label: "Authoritative (Root Servers)",
    },
    ResolverPreset {
        value: CUSTOM_NAMESERVER,
        label: "Custom",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeOption {
    pub id: &'static str,
    pub popular: bool,
}

const fn option(id: &'static str, popular: bool) -> RecordTypeOption {
    RecordTypeOption { id, popular }
}

pub const RECORD_TYPE_CATALOGUE: [RecordTypeOption; 33] = [
    option("A", true),
    option("AAAA", true),
    option("CAA", true),
    option("CDNSKEY", false),
    option("CDS", false),
    option("CERT", false),
    option("CNAME", true),
    option("DNAME", false),
    option("DNSKEY", false),
    option("DS", true),
    option("HINFO", false),
    option("HTTPS", false),
    option("KEY", false),
    option("LOC", false),
    option("MX", true),
    option("NAPTR", false),
    option("NS", true),
    option("NSEC", false),
    option("NSEC3", false),
    option("NSEC3PARAM", false),
    option("OPENPGPKEY", false),
    option("PTR", false),
    option("RP", false),
    option("RRSIG", false),
    option("SIG", false),
    option("SOA", true),
    option("SRV", false),
    option("SSHFP", false),
    option("SVCB", false),
    option("TLSA", false),
    option("TSIG", false),
    option("TXT", true),
    option("URI", false),
];

pub fn popular_record_types() -> Vec<String> {
    RECORD_TYPE_CATALOGUE
        .iter()
        .filter(|t| t.popular)
        .map(|t| t.id.to_string())
        .collect()
}

pub fn all_record_types() -> Vec<String> {
    RECORD_TYPE_CATALOGUE
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}
