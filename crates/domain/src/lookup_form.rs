use crate::dns_query::AUTHORITATIVE_NAMESERVER;
use crate::presets::{
    all_record_types, popular_record_types, CUSTOM_NAMESERVER, DEFAULT_NAMESERVER,
    RECORD_TYPE_CATALOGUE,
};
use crate::{LookupRequest, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOption {
    pub value: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

/// Editable lookup form. DoH is never offered for authoritative lookups:
/// the option is disabled and any inconsistent combination is corrected back
/// to TCP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupForm {
    domain: String,
    nameserver: String,
    custom_nameserver: String,
    record_types: Vec<String>,
    dnssec: bool,
    transport: Transport,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            domain: String::new(),
            nameserver: DEFAULT_NAMESERVER.to_string(),
            custom_nameserver: String::new(),
            record_types: popular_record_types(),
            dnssec: false,
            transport: Transport::Tcp,
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn nameserver(&self) -> &str {
        &self.nameserver
    }

    pub fn record_types(&self) -> &[String] {
        &self.record_types
    }

    pub fn dnssec(&self) -> bool {
        self.dnssec
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn is_authoritative(&self) -> bool {
        self.nameserver == AUTHORITATIVE_NAMESERVER
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    pub fn set_custom_nameserver(&mut self, value: impl Into<String>) {
        self.custom_nameserver = value.into();
    }

    pub fn set_dnssec(&mut self, dnssec: bool) {
        self.dnssec = dnssec;
    }

    pub fn select_nameserver(&mut self, nameserver: impl Into<String>) {
        self.nameserver = nameserver.into();
        self.reconcile();
    }

    /// Returns `false` when the transport is disabled for the current
    /// nameserver and the selection was ignored.
    pub fn select_transport(&mut self, transport: Transport) -> bool {
        if transport == Transport::Doh && self.is_authoritative() {
            return false;
        }
        self.transport = transport;
        true
    }

    /// Forces TCP whenever DoH is paired with authoritative resolution.
    pub fn reconcile(&mut self) {
        if self.is_authoritative() && self.transport == Transport::Doh {
            self.transport = Transport::Tcp;
        }
    }

    pub fn transport_options(&self) -> [TransportOption; 3] {
        [
            TransportOption {
                value: "udp",
                label: "UDP",
                disabled: true,
            },
            TransportOption {
                value: "tcp",
                label: "TCP",
                disabled: false,
            },
            TransportOption {
                value: "doh",
                label: "DoH (DNS over HTTPS)",
                disabled: self.is_authoritative(),
            },
        ]
    }

    pub fn toggle_record_type(&mut self, record_type: &str) {
        if let Some(pos) = self.record_types.iter().position(|t| t == record_type) {
            self.record_types.remove(pos);
        } else {
            self.record_types.push(record_type.to_string());
        }
    }

    /// Replaces the selection, upper-casing mnemonics and dropping repeats.
    pub fn set_record_types<I, S>(&mut self, record_types: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.record_types.clear();
        for record_type in record_types {
            let record_type = record_type.as_ref().trim().to_ascii_uppercase();
            if !record_type.is_empty() && !self.record_types.contains(&record_type) {
                self.record_types.push(record_type);
            }
        }
    }

    /// Selects every catalogued type, or clears the selection when all are
    /// already selected.
    pub fn toggle_select_all(&mut self) {
        if self.record_types.len() == RECORD_TYPE_CATALOGUE.len() {
            self.record_types.clear();
        } else {
            self.record_types = all_record_types();
        }
    }

    pub fn effective_nameserver(&self) -> &str {
        if self.nameserver == CUSTOM_NAMESERVER {
            &self.custom_nameserver
        } else {
            &self.nameserver
        }
    }

    pub fn can_submit(&self, is_loading: bool) -> bool {
        self.domain.contains('.') && !self.record_types.is_empty() && !is_loading
    }

    pub fn submission(&self) -> Option<LookupRequest> {
        let nameserver = self.effective_nameserver();
        if self.domain.is_empty() || nameserver.is_empty() || self.record_types.is_empty() {
            return None;
        }

        Some(LookupRequest {
            domain: self.domain.clone(),
            nameserver: nameserver.to_string(),
            record_types: self.record_types.clone(),
            dnssec: self.dnssec,
            transport: self.transport,
        })
    }

    /// Fills in an example domain and submits it straight away.
    pub fn submit_example(&mut self, example: &str) -> Option<LookupRequest> {
        self.set_domain(example);
        self.submission()
    }
}
