//! HTTP server command
//!
//! Creates the pool, hands it to the server, and returns once the server
//! has shut down and closed it.

use anyhow::{Context, Result};
use clap::Parser;

use shipview_server::{create_pool, run_server};

use crate::config::{DatabaseArgs, HttpArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub http: HttpArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.database.to_config();
    let server_config = args.http.to_config();

    tracing::info!("Starting shipview server on {}", server_config.bind_addr);

    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.describe()))?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
