mod perform_lookup;

pub use perform_lookup::{
    PerformLookupUseCase, AUTHORITATIVE_SERVER_LABEL, DEFAULT_LOOKUP_RETRIES,
    DEFAULT_LOOKUP_TIMEOUT,
};
