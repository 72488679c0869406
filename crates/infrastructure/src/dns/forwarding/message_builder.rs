//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use dns_lookup_domain::{DomainError, QueryFlags};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};

/// Advertised UDP payload size in the OPT record.
pub const EDNS_MAX_PAYLOAD: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a single-question query and returns its ID with the wire bytes.
    ///
    /// RD is set only when the flags ask for it; a DO request adds an EDNS0
    /// OPT record with the DNSSEC OK bit.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
        flags: QueryFlags,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Self::parse_name(domain)?;
        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(flags.recursion_desired());
        message.add_query(Query::query(name, record_type));

        if flags.dnssec_ok() {
            let mut edns = Edns::new();
            edns.set_dnssec_ok(true);
            edns.set_max_payload(EDNS_MAX_PAYLOAD);
            message.set_edns(edns);
        }

        let bytes = message.to_vec().map_err(|e| {
            DomainError::InvalidDomainName(format!(
                "Failed to serialize query for '{}': {}",
                domain, e
            ))
        })?;

        Ok((id, bytes))
    }

    /// Parses a user-supplied name as fully qualified.
    pub fn parse_name(domain: &str) -> Result<Name, DomainError> {
        let trimmed = domain.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }

        let fqdn = if trimmed.ends_with('.') {
            trimmed.to_string()
        } else {
            format!("{}.", trimmed)
        };

        Name::from_utf8(&fqdn)
            .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", domain, e)))
    }
}
