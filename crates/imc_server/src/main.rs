//! IMC Server
//!
//! HTTP front end for the body-mass index calculator.

use anyhow::Context;
use clap::Parser;
use imc_server::config::ServerConfig;
use imc_server::server::Server;
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

fn init_tracing(level: Level) {
    // RUST_LOG directives refine the level given on the command line
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(config.log_level);

    let addr = config.socket_addr();
    tracing::info!(version = imc_server::VERSION, %addr, "Starting IMC server");

    Server::new(config)
        .run()
        .await
        .with_context(|| format!("serving on {}", addr))?;

    tracing::info!("Server stopped");
    Ok(())
}
