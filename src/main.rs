//! Forward Direct binary entrypoint.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use forward_direct::config::{load_config, ForwarderConfig};
use forward_direct::http::HttpServer;
use forward_direct::lifecycle::{signals, Shutdown};
use forward_direct::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "forward-direct", about = "HTTP redirector for .test domains")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ForwarderConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_suffix = %config.forward.allowed_suffix,
        default_scheme = %config.forward.default_scheme,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals::listen(&shutdown).await;
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
