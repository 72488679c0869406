use dns_lookup_domain::client_query::FALLBACK_FAILURE_MESSAGE;
use dns_lookup_domain::{
    ClientQueryState, DnsAnswer, DnsRecord, DomainError, LookupRequest, LookupResult, QueryPhase,
    Transport,
};

fn request(transport: Transport, dnssec: bool) -> LookupRequest {
    LookupRequest {
        domain: "example.com".to_string(),
        nameserver: "8.8.8.8".to_string(),
        record_types: vec!["A".to_string()],
        dnssec,
        transport,
    }
}

fn result() -> LookupResult {
    let record = DnsRecord::new("A", "example.com", "93.184.215.14", Some(60));
    LookupResult {
        records: vec![record.clone()],
        query_time: 42,
        server: "8.8.8.8".to_string(),
        raw_data: vec![DnsAnswer::success("A", "example.com", vec![record])],
    }
}

#[test]
fn test_starts_idle_with_nothing_displayed() {
    let state = ClientQueryState::new();

    assert_eq!(state.phase(), QueryPhase::Idle);
    assert!(state.results().is_none());
    assert!(state.raw_data().is_none());
    assert!(state.error().is_none());
    assert_eq!(state.query_info().server, None);
}

#[test]
fn test_begin_records_transport_and_dnssec_optimistically() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Doh, true)).unwrap();

    assert_eq!(state.phase(), QueryPhase::Loading);
    assert_eq!(state.query_info().transport, Some(Transport::Doh));
    assert_eq!(state.query_info().dnssec, Some(true));
    assert_eq!(state.query_info().server, None);
}

#[test]
fn test_second_begin_while_loading_is_rejected() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();

    let err = state.begin(&request(Transport::Doh, true)).unwrap_err();

    assert_eq!(err, DomainError::QueryInFlight);
    assert_eq!(state.query_info().transport, Some(Transport::Tcp));
}

#[test]
fn test_success_sets_results_server_and_time() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();

    assert!(state.succeed(result()));

    assert_eq!(state.phase(), QueryPhase::Success);
    assert_eq!(state.results().unwrap().len(), 1);
    assert_eq!(state.raw_data().unwrap().len(), 1);
    assert_eq!(state.query_info().server.as_deref(), Some("8.8.8.8"));
    assert_eq!(state.query_info().time, Some(42));
    assert_eq!(state.query_info().transport, Some(Transport::Tcp));
}

#[test]
fn test_results_stay_visible_while_next_query_loads() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();
    state.succeed(result());

    state.begin(&request(Transport::Doh, true)).unwrap();

    assert_eq!(state.phase(), QueryPhase::Loading);
    assert_eq!(state.results().unwrap().len(), 1);
    assert_eq!(state.query_info().server.as_deref(), Some("8.8.8.8"));
    assert_eq!(state.query_info().transport, Some(Transport::Doh));
}

#[test]
fn test_failure_clears_results_and_info() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();
    state.succeed(result());
    state.begin(&request(Transport::Tcp, false)).unwrap();

    assert!(state.fail("SERVFAIL"));

    assert_eq!(state.phase(), QueryPhase::Failed);
    assert!(state.results().is_none());
    assert!(state.raw_data().is_none());
    assert_eq!(state.query_info().transport, None);
    assert_eq!(state.query_info().server, None);
}

#[test]
fn test_notification_is_delivered_exactly_once() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();
    state.fail("timeout");

    assert_eq!(state.take_notification().as_deref(), Some("timeout"));
    assert_eq!(state.take_notification(), None);
    assert_eq!(state.phase(), QueryPhase::Failed);
}

#[test]
fn test_empty_failure_message_uses_fallback() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();
    state.fail("");

    assert_eq!(state.error(), Some(FALLBACK_FAILURE_MESSAGE));
}

#[test]
fn test_begin_after_failure_clears_error() {
    let mut state = ClientQueryState::new();
    state.begin(&request(Transport::Tcp, false)).unwrap();
    state.fail("boom");

    state.begin(&request(Transport::Tcp, true)).unwrap();

    assert!(state.error().is_none());
    assert!(state.results().is_none());
    assert_eq!(state.query_info().dnssec, Some(true));
}

#[test]
fn test_completion_without_query_in_flight_is_ignored() {
    let mut state = ClientQueryState::new();

    assert!(!state.succeed(result()));
    assert!(!state.fail("late"));
    assert_eq!(state.phase(), QueryPhase::Idle);
}
