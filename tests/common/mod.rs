//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use recipe_relay::config::{RelayConfig, TimeoutConfig};
use recipe_relay::http::RelayServer;
use recipe_relay::lifecycle::Shutdown;

/// Start a mock backend that sends a fixed response and closes.
///
/// Returns the backend address and a counter of accepted connections, so
/// tests can assert that connections are never reused.
pub async fn start_fixed_backend(response: &'static [u8]) -> (SocketAddr, Arc<AtomicU32>) {
    start_backend(move |mut socket| async move {
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(response).await;
        let _ = socket.shutdown().await;
    })
    .await
}

/// Start a mock backend that echoes each request back verbatim and closes.
pub async fn start_echo_backend() -> (SocketAddr, Arc<AtomicU32>) {
    start_backend(|mut socket| async move {
        let mut buf = [0u8; 4096];
        if let Ok(n) = socket.read(&mut buf).await {
            let _ = socket.write_all(&buf[..n]).await;
        }
        let _ = socket.shutdown().await;
    })
    .await
}

/// Start a mock backend that accepts, reads, and then holds the connection
/// open without ever closing it.
#[allow(dead_code)]
pub async fn start_silent_backend() -> (SocketAddr, Arc<AtomicU32>) {
    start_backend(|mut socket| async move {
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(Duration::from_secs(60)).await;
    })
    .await
}

async fn start_backend<F, Fut>(handler: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn(TcpStream) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicU32::new(0));
    let seen = connections.clone();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    seen.fetch_add(1, Ordering::SeqCst);
                    let handler = handler.clone();
                    tokio::spawn(async move { handler(socket).await });
                }
                Err(_) => break,
            }
        }
    });

    (addr, connections)
}

/// Start the relay on an ephemeral port, pointed at the given backend.
///
/// Deadlines are shortened so failure tests settle quickly.
pub async fn start_relay(backend_addr: SocketAddr) -> (SocketAddr, Shutdown) {
    let mut config = RelayConfig::default();
    config.backend.address = backend_addr.to_string();
    config.timeouts = TimeoutConfig {
        connect_secs: 1,
        relay_secs: 2,
        request_secs: 3,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = RelayServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the server a moment to start accepting.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}
