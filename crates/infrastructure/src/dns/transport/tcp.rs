use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_lookup_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const DNS_HEADER_LEN: usize = 12;
pub const DEFAULT_DNS_PORT: u16 = 53;

/// DNS over TCP with the two-byte length prefix of RFC 1035 §4.2.2.
///
/// Every query opens its own connection; lookups are one-shot so there is
/// nothing worth pooling.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn error(&self, reason: impl Into<String>) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: reason.into(),
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.error("timeout connecting"))?
            .map_err(|e| self.error(format!("connection failed: {}", e)))?;

        stream
            .set_nodelay(true)
            .map_err(|e| self.error(format!("failed to set TCP_NODELAY: {}", e)))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.error("timeout sending query"))?
            .map_err(|e| self.error(e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.error("timeout waiting for response"))?
            .map_err(|e| self.error(e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

/// Accepts `IP`, `IP:port`, `[v6]:port`, `host` or `host:port`. Bare
/// addresses and hostnames get port 53.
pub async fn resolve_server_addr(server: &str) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    let host_port = match server.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => server.to_string(),
        _ => format!("{}:{}", server, DEFAULT_DNS_PORT),
    };

    let mut addrs = tokio::net::lookup_host(&host_port)
        .await
        .map_err(|e| DomainError::Transport {
            server: server.to_string(),
            reason: format!("could not resolve nameserver: {}", e),
        })?;

    addrs.next().ok_or_else(|| DomainError::Transport {
        server: server.to_string(),
        reason: "nameserver resolved to no addresses".to_string(),
    })
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), String>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len())
        .map_err(|_| format!("query too large: {} bytes", message_bytes.len()))?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| format!("failed to write length prefix: {}", e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| format!("failed to write DNS message: {}", e))?;
    stream
        .flush()
        .await
        .map_err(|e| format!("failed to flush stream: {}", e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, String>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| format!("failed to read response length: {}", e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len < DNS_HEADER_LEN {
        return Err(format!("response too short: {} bytes", response_len));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| format!("failed to read response body: {}", e))?;

    Ok(response)
}
