use crate::dns::forwarding::{DnsResponse, RecordTypeMapper};
use dns_lookup_domain::{AnswerError, DnsAnswer, DnsRecord, DomainError};
use hickory_proto::rr::{Name, Record};

/// Owner names are shown without the trailing root dot; the root itself
/// stays `.`.
pub fn display_name(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => text,
    }
}

pub fn to_dns_record(record: &Record) -> DnsRecord {
    DnsRecord::new(
        RecordTypeMapper::label(record.record_type()),
        display_name(record.name()),
        record.data().to_string(),
        Some(record.ttl()),
    )
}

/// Builds the per-type answer: records from the answer section on NOERROR,
/// an [`AnswerError`] carrying the RCODE otherwise.
pub fn answer_from_response(
    queried_type: &str,
    domain: &str,
    server: Option<&str>,
    response: &DnsResponse,
) -> DnsAnswer {
    let answer = if response.is_success() {
        DnsAnswer::success(
            queried_type,
            domain,
            response.answers.iter().map(to_dns_record).collect(),
        )
    } else {
        DnsAnswer::failure(
            queried_type,
            domain,
            AnswerError::new(
                response.status(),
                format!(
                    "{} lookup for {} failed: {}",
                    queried_type, domain, response.rcode
                ),
            ),
        )
    };

    match server {
        Some(server) => answer.with_server(server),
        None => answer,
    }
}

/// Per-type answer for a sub-query that ended without a DNS response.
pub fn answer_from_error(queried_type: &str, domain: &str, error: &DomainError) -> DnsAnswer {
    let code = match error {
        DomainError::UnsupportedRecordType(_) => "NOTIMP",
        DomainError::InvalidDomainName(_) => "FORMERR",
        _ => "SERVFAIL",
    };
    DnsAnswer::failure(
        queried_type,
        domain,
        AnswerError::new(code, error.to_string()),
    )
}
