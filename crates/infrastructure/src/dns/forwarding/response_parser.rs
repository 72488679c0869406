use dns_lookup_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub authoritative: bool,

    pub truncated: bool,

    pub answers: Vec<Record>,

    pub authority_records: Vec<Record>,

    pub additional_records: Vec<Record>,
}

impl DnsResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Short status mnemonic, e.g. `SERVFAIL`.
    pub fn status(&self) -> &'static str {
        ResponseParser::rcode_to_status(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire-format response. Malformed bytes are a transport-level
    /// failure: the upstream answered, but not with DNS.
    pub fn parse(response_bytes: &[u8], server: &str) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| DomainError::Transport {
            server: server.to_string(),
            reason: format!("failed to parse DNS response: {}", e),
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        debug!(
            rcode = ?rcode,
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            authoritative: message.authoritative(),
            truncated,
            answers: message.answers().to_vec(),
            authority_records: message.name_servers().to_vec(),
            additional_records: message.additionals().to_vec(),
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
