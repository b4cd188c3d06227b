//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use forward_direct::config::ForwarderConfig;
use forward_direct::http::HttpServer;
use forward_direct::lifecycle::Shutdown;

/// Start a forwarder on the given address. The returned handle keeps the
/// server alive; trigger it to shut the server down.
pub async fn start_forwarder(addr: SocketAddr, mut config: ForwarderConfig) -> Shutdown {
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(200)).await;

    shutdown
}

/// HTTP client that does not follow redirects, so `Location` can be
/// asserted directly.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
