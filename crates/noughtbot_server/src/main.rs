//! Noughtbot HTTP server entry point.

use anyhow::Result;
use clap::Parser;
use noughtbot_engine::GameSession;
use noughtbot_server::{Cli, SharedSession, router};
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting noughtbot server");

    let session: SharedSession = Arc::new(Mutex::new(GameSession::new()));
    let app = router(session);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(
        host = %cli.host,
        port = cli.port,
        "Server ready at http://{}:{}/",
        cli.host,
        cli.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
