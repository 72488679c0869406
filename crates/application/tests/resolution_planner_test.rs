mod helpers;

use dns_lookup_application::services::ResolutionPlanner;
use dns_lookup_domain::{DohEndpointTable, QueryFlag, Transport};
use helpers::query;
use std::sync::Arc;

fn planner() -> ResolutionPlanner {
    ResolutionPlanner::new(Arc::new(DohEndpointTable::default()))
}

// ── scenarios ──────────────────────────────────────────────────────────────

#[test]
fn test_plain_tcp_lookup_plan() {
    let plan = planner().plan(&query("8.8.8.8", &["A"], false, Transport::Tcp));

    assert!(!plan.is_authoritative);
    assert_eq!(plan.flags.iter().collect::<Vec<_>>(), vec![QueryFlag::RD]);
    assert_eq!(plan.target_server.as_deref(), Some("8.8.8.8"));
    assert_eq!(plan.effective_types, vec!["A".to_string()]);
}

#[test]
fn test_dnssec_doh_lookup_plan() {
    let plan = planner().plan(&query("8.8.8.8", &["A"], true, Transport::Doh));

    assert_eq!(
        plan.flags.iter().collect::<Vec<_>>(),
        vec![QueryFlag::RD, QueryFlag::DO]
    );
    assert_eq!(
        plan.target_server.as_deref(),
        Some("https://dns.google/dns-query")
    );
    assert_eq!(plan.effective_types, vec!["A", "DNSKEY", "DS", "RRSIG"]);
}

#[test]
fn test_authoritative_doh_has_no_target() {
    let plan = planner().plan(&query("authoritative", &["A"], false, Transport::Doh));

    assert!(plan.is_authoritative);
    assert!(plan.target_server.is_none());
    assert!(plan.flags.is_empty());
}

#[test]
fn test_authoritative_tcp_has_no_target() {
    let plan = planner().plan(&query("authoritative", &["NS"], false, Transport::Tcp));
    assert!(plan.target_server.is_none());
}

// ── flags ──────────────────────────────────────────────────────────────────

#[test]
fn test_authoritative_never_sets_rd() {
    for dnssec in [false, true] {
        for transport in [Transport::Tcp, Transport::Doh] {
            let plan = planner().plan(&query("authoritative", &["A"], dnssec, transport));
            assert!(!plan.flags.contains(QueryFlag::RD));
            assert_eq!(plan.flags.contains(QueryFlag::DO), dnssec);
        }
    }
}

#[test]
fn test_authoritative_dnssec_sets_only_do() {
    let plan = planner().plan(&query("authoritative", &["A"], true, Transport::Tcp));
    assert_eq!(plan.flags.iter().collect::<Vec<_>>(), vec![QueryFlag::DO]);
}

#[test]
fn test_recursive_always_sets_rd() {
    for dnssec in [false, true] {
        let plan = planner().plan(&query("9.9.9.9", &["MX"], dnssec, Transport::Tcp));
        assert!(plan.flags.contains(QueryFlag::RD));
        assert_eq!(plan.flags.contains(QueryFlag::DO), dnssec);
    }
}

// ── target server ──────────────────────────────────────────────────────────

#[test]
fn test_doh_maps_every_known_resolver_to_its_endpoint() {
    let table = DohEndpointTable::default();
    for (ip, url) in table.iter() {
        let plan = planner().plan(&query(ip, &["A"], false, Transport::Doh));
        assert_eq!(plan.target_server.as_deref(), Some(url));
    }
}

#[test]
fn test_doh_accepts_url_nameserver() {
    let plan = planner().plan(&query(
        "https://doh.example.net/dns-query",
        &["A"],
        false,
        Transport::Doh,
    ));
    assert_eq!(
        plan.target_server.as_deref(),
        Some("https://doh.example.net/dns-query")
    );
}

#[test]
fn test_doh_unknown_ip_has_no_target() {
    let plan = planner().plan(&query("192.0.2.53", &["A"], false, Transport::Doh));
    assert!(plan.target_server.is_none());
}

#[test]
fn test_tcp_uses_nameserver_verbatim_even_when_in_doh_table() {
    let plan = planner().plan(&query("1.1.1.1", &["A"], false, Transport::Tcp));
    assert_eq!(plan.target_server.as_deref(), Some("1.1.1.1"));
}

#[test]
fn test_custom_table_overrides_defaults() {
    let table = DohEndpointTable::new([("192.0.2.53", "https://doh.internal/dns-query")]);
    let planner = ResolutionPlanner::new(Arc::new(table));

    let custom = planner.plan(&query("192.0.2.53", &["A"], false, Transport::Doh));
    let google = planner.plan(&query("8.8.8.8", &["A"], false, Transport::Doh));

    assert_eq!(
        custom.target_server.as_deref(),
        Some("https://doh.internal/dns-query")
    );
    assert!(google.target_server.is_none());
}

// ── effective types ────────────────────────────────────────────────────────

#[test]
fn test_dnssec_types_appended_even_when_already_requested() {
    let plan = planner().plan(&query("8.8.8.8", &["DS", "A"], true, Transport::Tcp));
    assert_eq!(plan.effective_types, vec!["DS", "A", "DNSKEY", "DS", "RRSIG"]);
}

#[test]
fn test_effective_types_superset_of_requested() {
    let requested = ["MX", "TXT", "AAAA"];
    for dnssec in [false, true] {
        let plan = planner().plan(&query("8.8.8.8", &requested, dnssec, Transport::Tcp));
        for t in requested {
            assert!(plan.effective_types.iter().any(|e| e == t));
        }
        assert_eq!(&plan.effective_types[..3], &requested);
    }
}

#[test]
fn test_plan_is_idempotent() {
    let planner = planner();
    let q = query("8.8.8.8", &["A", "MX"], true, Transport::Doh);

    assert_eq!(planner.plan(&q), planner.plan(&q));
}
