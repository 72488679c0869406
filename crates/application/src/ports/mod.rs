mod lookup_api;
mod resolution_engine;

pub use lookup_api::LookupApi;
pub use resolution_engine::{DnsResolutionEngine, EngineOptions, EngineQuery};
