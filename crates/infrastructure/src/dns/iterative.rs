//! Iterative resolution from the root servers.
//!
//! Each step asks the current set of servers over TCP without RD. A response
//! that carries answers, an error RCODE or the AA bit ends the walk; a
//! referral (NS records in the authority section) moves to the delegated
//! servers, using glue when present and resolving the NS names otherwise.

use crate::dns::forwarding::{DnsForwarder, DnsResponse, MessageBuilder};
use crate::dns::transport::{tcp::DEFAULT_DNS_PORT, tcp_transport};
use dns_lookup_domain::{DomainError, QueryFlags};
use futures::future::BoxFuture;
use futures::FutureExt;
use hickory_proto::rr::{Name, RData, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// Nested lookups for glueless NS names stop at this depth.
const MAX_NS_RESOLUTION_DEPTH: u8 = 3;

/// Delegated servers tried per step.
const MAX_SERVERS_PER_STEP: usize = 4;

#[derive(Debug, Clone)]
pub struct IterativeResolver {
    root_servers: Vec<SocketAddr>,
    max_referrals: usize,
    /// Port used to reach delegated nameservers.
    delegation_port: u16,
}

/// Final response of a walk and the server that produced it.
#[derive(Debug, Clone)]
pub struct IterativeAnswer {
    pub response: DnsResponse,
    pub server: SocketAddr,
}

impl IterativeResolver {
    pub fn new(root_servers: Vec<SocketAddr>, max_referrals: usize) -> Self {
        Self {
            root_servers,
            max_referrals,
            delegation_port: DEFAULT_DNS_PORT,
        }
    }

    pub fn with_delegation_port(mut self, port: u16) -> Self {
        self.delegation_port = port;
        self
    }

    /// Accepts `IP` or `IP:port` hints; entries that are neither are skipped.
    pub fn from_hints<S: AsRef<str>>(hints: &[S], max_referrals: usize) -> Self {
        let root_servers = hints
            .iter()
            .filter_map(|hint| parse_hint(hint.as_ref()))
            .collect();
        Self::new(root_servers, max_referrals)
    }

    pub fn root_servers(&self) -> &[SocketAddr] {
        &self.root_servers
    }

    pub async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
        flags: QueryFlags,
        timeout: Duration,
        attempts: u32,
    ) -> Result<IterativeAnswer, DomainError> {
        self.walk(domain.to_string(), record_type, flags, timeout, attempts, 0)
            .await
    }

    fn walk(
        &self,
        domain: String,
        record_type: RecordType,
        flags: QueryFlags,
        timeout: Duration,
        attempts: u32,
        depth: u8,
    ) -> BoxFuture<'_, Result<IterativeAnswer, DomainError>> {
        async move {
            // Reject bad names before touching the network.
            MessageBuilder::parse_name(&domain)?;

            let mut servers = self.root_servers.clone();
            if servers.is_empty() {
                return Err(DomainError::Resolution(
                    "No root servers configured".to_string(),
                ));
            }

            for referral in 0..=self.max_referrals {
                let answer = self
                    .ask_any(&servers, &domain, record_type, flags, timeout, attempts)
                    .await?;
                let response = &answer.response;

                if !response.is_success()
                    || !response.answers.is_empty()
                    || response.authoritative
                {
                    return Ok(answer);
                }

                let ns_names = delegated_names(response);
                if ns_names.is_empty() {
                    return Ok(answer);
                }

                let mut next = glue_addresses(response, &ns_names, self.delegation_port);
                if next.is_empty() && depth < MAX_NS_RESOLUTION_DEPTH {
                    next = self
                        .resolve_ns_addresses(&ns_names, timeout, attempts, depth)
                        .await;
                }
                if next.is_empty() {
                    return Err(DomainError::Resolution(format!(
                        "Delegation for {} has no reachable nameservers",
                        domain
                    )));
                }

                debug!(
                    domain = %domain,
                    referral,
                    from = %answer.server,
                    next = ?next,
                    "Following referral"
                );
                next.truncate(MAX_SERVERS_PER_STEP);
                servers = next;
            }

            Err(DomainError::Resolution(format!(
                "Resolution of {} exceeded {} referrals",
                domain, self.max_referrals
            )))
        }
        .boxed()
    }

    /// Tries each server in order until one answers.
    async fn ask_any(
        &self,
        servers: &[SocketAddr],
        domain: &str,
        record_type: RecordType,
        flags: QueryFlags,
        timeout: Duration,
        attempts: u32,
    ) -> Result<IterativeAnswer, DomainError> {
        let mut last_error = None;

        for server in servers {
            let transport = tcp_transport(*server);
            match DnsForwarder::query(&transport, domain, record_type, flags, timeout, attempts)
                .await
            {
                Ok(response) => {
                    return Ok(IterativeAnswer {
                        response,
                        server: *server,
                    })
                }
                Err(DomainError::InvalidDomainName(reason)) => {
                    return Err(DomainError::InvalidDomainName(reason))
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Nameserver failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            DomainError::Resolution(format!("No nameservers to ask for {}", domain))
        }))
    }

    async fn resolve_ns_addresses(
        &self,
        ns_names: &[Name],
        timeout: Duration,
        attempts: u32,
        depth: u8,
    ) -> Vec<SocketAddr> {
        for ns_name in ns_names {
            let lookup = self
                .walk(
                    ns_name.to_utf8(),
                    RecordType::A,
                    QueryFlags::empty(),
                    timeout,
                    attempts,
                    depth + 1,
                )
                .await;

            match lookup {
                Ok(answer) => {
                    let addrs: Vec<SocketAddr> = answer
                        .response
                        .answers
                        .iter()
                        .filter_map(|record| address_of(record.data()))
                        .map(|ip| SocketAddr::new(ip, self.delegation_port))
                        .collect();
                    if !addrs.is_empty() {
                        return addrs;
                    }
                }
                Err(e) => {
                    debug!(ns = %ns_name, error = %e, "Could not resolve glueless nameserver");
                }
            }
        }

        Vec::new()
    }
}

fn parse_hint(hint: &str) -> Option<SocketAddr> {
    hint.parse::<SocketAddr>()
        .ok()
        .or_else(|| {
            hint.parse::<IpAddr>()
                .ok()
                .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        })
}

fn delegated_names(response: &DnsResponse) -> Vec<Name> {
    response
        .authority_records
        .iter()
        .filter_map(|record| match record.data() {
            RData::NS(ns) => Some(ns.0.clone()),
            _ => None,
        })
        .collect()
}

/// Glue for the delegated names, IPv4 first.
fn glue_addresses(response: &DnsResponse, ns_names: &[Name], port: u16) -> Vec<SocketAddr> {
    let glue: Vec<IpAddr> = response
        .additional_records
        .iter()
        .filter(|record| ns_names.iter().any(|ns| ns == record.name()))
        .filter_map(|record| address_of(record.data()))
        .collect();

    glue.iter()
        .filter(|ip| ip.is_ipv4())
        .chain(glue.iter().filter(|ip| ip.is_ipv6()))
        .map(|ip| SocketAddr::new(*ip, port))
        .collect()
}

fn address_of(data: &RData) -> Option<IpAddr> {
    match data {
        RData::A(a) => Some(IpAddr::V4(a.0)),
        RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
        _ => None,
    }
}
