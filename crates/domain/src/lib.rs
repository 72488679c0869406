//! DNS Lookup Domain Layer
pub mod client_query;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod doh_endpoints;
pub mod errors;
pub mod lookup_form;
pub mod lookup_request;
pub mod presets;
pub mod resolution_plan;

pub use client_query::{ClientQueryState, DisplayedResults, QueryInfo, QueryPhase};
pub use config::{CliOverrides, Config};
pub use dns_query::{LookupQuery, Transport, AUTHORITATIVE_NAMESERVER};
pub use dns_record::{flatten_answers, AnswerError, DnsAnswer, DnsRecord, LookupResult};
pub use doh_endpoints::DohEndpointTable;
pub use errors::{DomainError, ErrorKind};
pub use lookup_form::{LookupForm, TransportOption};
pub use lookup_request::LookupRequest;
pub use presets::{ResolverPreset, RESOLVER_PRESETS};
pub use resolution_plan::{QueryFlag, QueryFlags, ResolutionPlan, DNSSEC_RECORD_TYPES};
