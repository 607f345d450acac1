use std::env;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::store::{InMemoryStore, load_snapshot};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir =
        env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let listen_addr =
        env::var("PAYROLL_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        organization = %config.organization().name,
        period_strategy = ?config.period_strategy(),
        "Configuration loaded"
    );

    let store = match env::var("PAYROLL_SNAPSHOT") {
        Ok(path) => load_snapshot(path)?,
        Err(_) => InMemoryStore::new(),
    };

    let router = create_router(AppState::new(config, store));
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!(listen_addr = %listen_addr, "Payroll ledger listening");
    axum::serve(listener, router).await?;

    Ok(())
}
