//! Resourceful demo server.
//!
//! Serves every resource listed in the configuration from memory, using the
//! conventional five routes per resource.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use resourceful::config::{load_config, validate_config, ConfigError, ServerConfig};
use resourceful::lifecycle::{wait_for_signal, Shutdown};
use resourceful::observability::init_logging;
use resourceful::{HttpServer, MemoryResource, ResourceRouter};

#[derive(Parser)]
#[command(name = "resourceful-server")]
#[command(about = "Serve in-memory REST resources", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        resources = ?config.resources,
        "Configuration loaded"
    );

    let router = config
        .resources
        .iter()
        .fold(ResourceRouter::builder(), |builder, name| {
            builder.add_resource(name.clone(), MemoryResource::new(name.clone()))
        })
        .build()?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, router);
    let mut handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        res = &mut handle => {
            // Server exited on its own; surface why.
            res??;
        }
        _ = wait_for_signal() => {
            shutdown.trigger();
            handle.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
