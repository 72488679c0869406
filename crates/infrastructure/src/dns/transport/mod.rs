pub mod https;
pub mod tcp;

use async_trait::async_trait;
use dns_lookup_domain::{DomainError, Transport};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

/// A connected-or-connectable upstream, one variant per wire protocol.
#[derive(Debug, Clone)]
pub enum UpstreamTransport {
    Tcp(tcp::TcpTransport),
    Https(https::HttpsTransport),
}

impl UpstreamTransport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Tcp(_) => "TCP",
            Self::Https(_) => "HTTPS",
        }
    }

    /// Address or URL used in logs and error messages.
    pub fn server(&self) -> String {
        match self {
            Self::Tcp(t) => t.server_addr().to_string(),
            Self::Https(t) => t.url().to_string(),
        }
    }
}

/// Turns a resolved target into a transport. `server` must already be a
/// URL for DoH; TCP targets are resolved to a socket address first.
pub async fn create_transport(
    kind: Transport,
    server: &str,
) -> Result<UpstreamTransport, DomainError> {
    match kind {
        Transport::Tcp => {
            let addr = tcp::resolve_server_addr(server).await?;
            Ok(UpstreamTransport::Tcp(tcp::TcpTransport::new(addr)))
        }
        Transport::Doh => Ok(UpstreamTransport::Https(https::HttpsTransport::new(
            server.to_string(),
        ))),
    }
}

pub fn tcp_transport(addr: SocketAddr) -> UpstreamTransport {
    UpstreamTransport::Tcp(tcp::TcpTransport::new(addr))
}
