//! Caller-side lifecycle of a lookup: `idle → loading → success | failed`.
//!
//! Every phase carries exactly the data it can display, so a failed state can
//! never hold stale results and a loading state can never hold an error.

use crate::{DnsAnswer, DnsRecord, DomainError, LookupRequest, LookupResult, Transport};

pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to perform DNS lookup. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInfo {
    pub server: Option<String>,
    pub time: Option<u64>,
    pub transport: Option<Transport>,
    pub dnssec: Option<bool>,
}

static EMPTY_INFO: QueryInfo = QueryInfo {
    server: None,
    time: None,
    transport: None,
    dnssec: None,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedResults {
    pub records: Vec<DnsRecord>,
    pub raw_data: Vec<DnsAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientQueryState {
    #[default]
    Idle,
    Loading {
        info: QueryInfo,
        shown: Option<DisplayedResults>,
    },
    Success {
        info: QueryInfo,
        shown: DisplayedResults,
    },
    Failed {
        notification: Option<String>,
    },
}

impl ClientQueryState {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn phase(&self) -> QueryPhase {
        match self {
            Self::Idle => QueryPhase::Idle,
            Self::Loading { .. } => QueryPhase::Loading,
            Self::Success { .. } => QueryPhase::Success,
            Self::Failed { .. } => QueryPhase::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Starts a new cycle. Transport and DNSSEC are recorded immediately;
    /// results from a previous success stay visible until the response lands.
    pub fn begin(&mut self, request: &LookupRequest) -> Result<(), DomainError> {
        let (mut info, shown) = match std::mem::take(self) {
            Self::Loading { info, shown } => {
                *self = Self::Loading { info, shown };
                return Err(DomainError::QueryInFlight);
            }
            Self::Success { info, shown } => (info, Some(shown)),
            Self::Idle | Self::Failed { .. } => (QueryInfo::default(), None),
        };

        info.transport = Some(request.transport);
        info.dnssec = Some(request.dnssec);
        *self = Self::Loading { info, shown };
        Ok(())
    }

    /// Applies a successful response. Returns `false` when no query is in
    /// flight.
    pub fn succeed(&mut self, result: LookupResult) -> bool {
        let Self::Loading { info, .. } = self else {
            return false;
        };

        let mut info = std::mem::take(info);
        info.server = Some(result.server);
        info.time = Some(result.query_time);
        *self = Self::Success {
            info,
            shown: DisplayedResults {
                records: result.records,
                raw_data: result.raw_data,
            },
        };
        true
    }

    /// Records a failure and drops every piece of result state.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_loading() {
            return false;
        }

        let message = message.into();
        let message = if message.is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        *self = Self::Failed {
            notification: Some(message),
        };
        true
    }

    /// Hands out the failure message once; later calls return `None`.
    pub fn take_notification(&mut self) -> Option<String> {
        match self {
            Self::Failed { notification } => notification.take(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { notification } => notification.as_deref(),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&[DnsRecord]> {
        self.shown().map(|shown| shown.records.as_slice())
    }

    pub fn raw_data(&self) -> Option<&[DnsAnswer]> {
        self.shown().map(|shown| shown.raw_data.as_slice())
    }

    pub fn query_info(&self) -> &QueryInfo {
        match self {
            Self::Loading { info, .. } | Self::Success { info, .. } => info,
            Self::Idle | Self::Failed { .. } => &EMPTY_INFO,
        }
    }

    fn shown(&self) -> Option<&DisplayedResults> {
        match self {
            Self::Loading { shown, .. } => shown.as_ref(),
            Self::Success { shown, .. } => Some(shown),
            Self::Idle | Self::Failed { .. } => None,
        }
    }
}
