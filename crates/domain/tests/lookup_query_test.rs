use dns_lookup_domain::{
    flatten_answers, AnswerError, DnsAnswer, DnsRecord, DomainError, ErrorKind, LookupQuery,
    LookupRequest, QueryFlag, QueryFlags, Transport,
};

fn types(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

// ── LookupQuery validation ─────────────────────────────────────────────────

#[test]
fn test_query_accepts_minimal_input() {
    let query = LookupQuery::new("example.com", "8.8.8.8", types(&["A"]), false, Transport::Tcp)
        .unwrap();

    assert_eq!(query.domain(), "example.com");
    assert_eq!(query.nameserver(), "8.8.8.8");
    assert_eq!(query.record_types(), &["A".to_string()]);
    assert!(!query.dnssec());
    assert_eq!(query.transport(), Transport::Tcp);
    assert!(!query.is_authoritative());
}

#[test]
fn test_query_rejects_empty_domain() {
    let result = LookupQuery::new("", "8.8.8.8", types(&["A"]), false, Transport::Tcp);
    assert!(matches!(result, Err(DomainError::InvalidQuery(_))));
}

#[test]
fn test_query_rejects_empty_nameserver() {
    let result = LookupQuery::new("example.com", "", types(&["A"]), false, Transport::Tcp);
    assert!(matches!(result, Err(DomainError::InvalidQuery(_))));
}

#[test]
fn test_query_rejects_empty_record_types() {
    let result = LookupQuery::new("example.com", "8.8.8.8", vec![], false, Transport::Tcp);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_query_keeps_first_occurrence_order_of_record_types() {
    let query = LookupQuery::new(
        "example.com",
        "8.8.8.8",
        types(&["MX", "A", "MX", "TXT", "A"]),
        false,
        Transport::Tcp,
    )
    .unwrap();

    assert_eq!(query.record_types(), types(&["MX", "A", "TXT"]).as_slice());
}

#[test]
fn test_query_detects_authoritative_nameserver() {
    let query = LookupQuery::new(
        "example.com",
        "authoritative",
        types(&["NS"]),
        false,
        Transport::Tcp,
    )
    .unwrap();
    assert!(query.is_authoritative());
}

// ── LookupRequest wire format ──────────────────────────────────────────────

#[test]
fn test_request_defaults_dnssec_and_transport() {
    let request: LookupRequest = serde_json::from_str(
        r#"{"domain":"example.com","nameserver":"8.8.8.8","recordTypes":["A"]}"#,
    )
    .unwrap();

    assert!(!request.dnssec);
    assert_eq!(request.transport, Transport::Tcp);
}

#[test]
fn test_request_rejects_unknown_transport() {
    let result: Result<LookupRequest, _> = serde_json::from_str(
        r#"{"domain":"example.com","nameserver":"8.8.8.8","recordTypes":["A"],"transport":"udp"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_request_into_query_validates() {
    let request = LookupRequest {
        domain: "example.com".to_string(),
        nameserver: "8.8.8.8".to_string(),
        record_types: vec![],
        dnssec: true,
        transport: Transport::Doh,
    };
    assert!(request.into_query().is_err());
}

#[test]
fn test_transport_parses_from_str() {
    assert_eq!("tcp".parse::<Transport>().unwrap(), Transport::Tcp);
    assert_eq!("doh".parse::<Transport>().unwrap(), Transport::Doh);
    assert!("udp".parse::<Transport>().is_err());
}

// ── QueryFlags ─────────────────────────────────────────────────────────────

#[test]
fn test_flags_iterate_in_rd_do_order() {
    let flags: QueryFlags = [QueryFlag::DO, QueryFlag::RD].into_iter().collect();
    let collected: Vec<QueryFlag> = flags.iter().collect();
    assert_eq!(collected, vec![QueryFlag::RD, QueryFlag::DO]);
}

#[test]
fn test_flags_serialize_as_string_list() {
    let flags = QueryFlags::empty().with(QueryFlag::RD);
    assert_eq!(serde_json::to_string(&flags).unwrap(), r#"["RD"]"#);
    assert_eq!(serde_json::to_string(&QueryFlags::empty()).unwrap(), "[]");
}

// ── Records & answers ──────────────────────────────────────────────────────

#[test]
fn test_flatten_preserves_answer_then_record_order() {
    let answers = vec![
        DnsAnswer::success(
            "A",
            "example.com",
            vec![
                DnsRecord::new("A", "example.com", "93.184.215.14", Some(300)),
                DnsRecord::new("A", "example.com", "93.184.215.15", Some(300)),
            ],
        ),
        DnsAnswer::success("AAAA", "example.com", vec![]),
        DnsAnswer::success(
            "MX",
            "example.com",
            vec![DnsRecord::new("MX", "example.com", "10 mail.example.com.", None)],
        ),
    ];

    let flat = flatten_answers(&answers);
    let contents: Vec<&str> = flat.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["93.184.215.14", "93.184.215.15", "10 mail.example.com."]
    );
}

#[test]
fn test_record_without_ttl_omits_field() {
    let record = DnsRecord::new("TXT", "example.com", "\"v=spf1 -all\"", None);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["type"], "TXT");
    assert!(json.get("ttl").is_none());
}

#[test]
fn test_answer_serializes_camel_case() {
    let answer = DnsAnswer::failure(
        "A",
        "bad..name",
        AnswerError::new("FORMERR", "malformed name"),
    );
    let json = serde_json::to_value(&answer).unwrap();

    assert_eq!(json["queriedType"], "A");
    assert_eq!(json["error"]["code"], "FORMERR");
    assert_eq!(json["records"].as_array().unwrap().len(), 0);
}

#[test]
fn test_duplicate_record_types_collapse_in_first_seen_order() {
    let query = LookupQuery::new(
        "example.com",
        "8.8.8.8",
        vec!["MX".to_string(), "A".to_string(), "MX".to_string()],
        false,
        Transport::Tcp,
    )
    .unwrap();

    assert_eq!(query.record_types(), &["MX".to_string(), "A".to_string()]);
}
