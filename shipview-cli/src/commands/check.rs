//! Connectivity check: the same probe `/health` runs, from the shell

use anyhow::{Context, Result};
use clap::Parser;

use shipview_server::{create_pool, OrderRepo, OrderStore};

use crate::config::DatabaseArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db_config = args.database.to_config();

    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.describe()))?;
    let repo = OrderRepo::new(pool.clone());

    let probe = repo.ping().await;
    pool.close().await;
    probe.context("Database probe failed")?;

    println!("database: connected ({})", db_config.describe());
    Ok(())
}
