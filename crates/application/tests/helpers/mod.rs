#![allow(dead_code)]
mod mock_ports;

pub use mock_ports::{MockLookupApi, MockResolutionEngine};

use dns_lookup_domain::{DnsAnswer, DnsRecord, LookupQuery, Transport};

pub fn query(nameserver: &str, types: &[&str], dnssec: bool, transport: Transport) -> LookupQuery {
    LookupQuery::new(
        "example.com",
        nameserver,
        types.iter().map(|t| t.to_string()).collect(),
        dnssec,
        transport,
    )
    .unwrap()
}

pub fn a_answer(ips: &[&str]) -> DnsAnswer {
    DnsAnswer::success(
        "A",
        "example.com",
        ips.iter()
            .map(|ip| DnsRecord::new("A", "example.com", *ip, Some(300)))
            .collect(),
    )
}
