use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub enum StubReply {
    Message(Message),
    /// Close the connection without answering.
    Drop,
    /// Hold the connection open without answering.
    Stall,
}

type Handler = Arc<dyn Fn(&Message) -> StubReply + Send + Sync>;

/// In-process DNS-over-TCP server on 127.0.0.1 with a scripted handler.
pub struct StubDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Message>>>,
    task: JoinHandle<()>,
}

impl StubDnsServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> StubReply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let received = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let task = {
            let received = Arc::clone(&received);
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let handler = Arc::clone(&handler);
                    let received = Arc::clone(&received);
                    tokio::spawn(serve_connection(stream, handler, received));
                }
            })
        };

        Self {
            addr,
            received,
            task,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl Drop for StubDnsServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    handler: Handler,
    received: Arc<Mutex<Vec<Message>>>,
) {
    loop {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query_bytes = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query_bytes).await.is_err() {
            return;
        }
        let Ok(query) = Message::from_vec(&query_bytes) else {
            return;
        };
        received.lock().unwrap().push(query.clone());

        match handler(&query) {
            StubReply::Message(response) => {
                let bytes = response.to_vec().unwrap();
                let len = (bytes.len() as u16).to_be_bytes();
                if stream.write_all(&len).await.is_err() || stream.write_all(&bytes).await.is_err()
                {
                    return;
                }
            }
            StubReply::Drop => return,
            StubReply::Stall => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                return;
            }
        }
    }
}

/// An address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
