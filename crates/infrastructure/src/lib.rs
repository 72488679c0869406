//! DNS Lookup Infrastructure Layer
pub mod dns;
pub mod http;
