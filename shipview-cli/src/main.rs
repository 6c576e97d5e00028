//! shipview CLI - runs the orders gateway
//!
//! - `serve`: HTTP API for the shipment map dashboard
//! - `check`: verify the database is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use logging::LogConfig;

#[derive(Parser, Debug)]
#[command(
    name = "shipview",
    author,
    version,
    about = "Read-only HTTP gateway over the shipment orders table"
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Check database connectivity and exit
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_config = LogConfig {
        debug: cli.debug,
        otel: cli.otel,
    };
    // Still serve without logs, but say so.
    if let Err(err) = logging::init(&log_config) {
        eprintln!("shipview: logging disabled: {err:#}");
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Check(args) => commands::run_check(args).await,
    };

    logging::shutdown();
    result
}
