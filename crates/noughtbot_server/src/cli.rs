//! Command-line interface for the noughtbot server.

use clap::Parser;

/// Tic-tac-toe HTTP server with a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughtbot")]
#[command(about = "Tic-tac-toe HTTP server with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}
