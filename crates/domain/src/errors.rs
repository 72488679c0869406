use thiserror::Error;

/// Coarse error classes surfaced at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete request; never retried.
    Validation,
    /// The resolution engine failed or reported a per-type error.
    Resolution,
    /// The server itself is missing something it needs.
    Configuration,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("No {transport} endpoint known for nameserver '{nameserver}'")]
    NoTargetServer {
        nameserver: String,
        transport: &'static str,
    },

    #[error("{0}")]
    Resolution(String),

    #[error("Query timeout after {timeout_ms}ms")]
    QueryTimeout { timeout_ms: u64 },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Assets not configured")]
    AssetsNotConfigured,

    #[error("A lookup is already in flight")]
    QueryInFlight,

    #[error("{0}")]
    Api(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidQuery(_) | DomainError::QueryInFlight => ErrorKind::Validation,
            DomainError::AssetsNotConfigured => ErrorKind::Configuration,
            DomainError::InvalidDomainName(_)
            | DomainError::UnsupportedRecordType(_)
            | DomainError::NoTargetServer { .. }
            | DomainError::Resolution(_)
            | DomainError::QueryTimeout { .. }
            | DomainError::Transport { .. }
            | DomainError::Api(_) => ErrorKind::Resolution,
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Transport { .. } | DomainError::QueryTimeout { .. }
        )
    }
}
