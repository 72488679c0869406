//! Mapping between record type mnemonics and `hickory_proto::rr::RecordType`.
//!
//! hickory has no named variant for a handful of types the lookup form
//! offers; those travel as `RecordType::Unknown(code)` and are mapped back to
//! their mnemonic when records are presented.

use dns_lookup_domain::DomainError;
use hickory_proto::rr::RecordType;
use std::str::FromStr;

/// Types without a named hickory variant, keyed by IANA code.
const NUMERIC_TYPES: [(&str, u16); 4] = [("RP", 17), ("LOC", 29), ("DNAME", 39), ("URI", 256)];

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Parses a mnemonic (case-insensitive) into a queryable type.
    ///
    /// Meta types that cannot be asked for in a plain lookup (`OPT`, `ANY`,
    /// zone transfers) are rejected along with unknown names.
    pub fn parse(mnemonic: &str) -> Result<RecordType, DomainError> {
        let upper = mnemonic.trim().to_ascii_uppercase();

        if let Some((_, code)) = NUMERIC_TYPES.iter().find(|(name, _)| *name == upper) {
            return Ok(RecordType::from(*code));
        }

        let record_type = RecordType::from_str(&upper)
            .map_err(|_| DomainError::UnsupportedRecordType(mnemonic.to_string()))?;

        match record_type {
            RecordType::ANY | RecordType::AXFR | RecordType::IXFR | RecordType::OPT => {
                Err(DomainError::UnsupportedRecordType(mnemonic.to_string()))
            }
            other => Ok(other),
        }
    }

    /// Presentation mnemonic for a type seen in a response.
    pub fn label(record_type: RecordType) -> String {
        let code = u16::from(record_type);
        NUMERIC_TYPES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| match record_type {
                RecordType::Unknown(code) => format!("TYPE{}", code),
                other => other.to_string(),
            })
    }
}
