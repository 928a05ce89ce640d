//! Argus application binary - composition root.
//!
//! Ties together all Argus crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Build and seed the in-memory supplier store
//! 3. Wire the chat orchestrator to the store through the search capability
//! 4. Start the axum REST API server

mod cli;

use std::sync::Arc;

use clap::Parser;

use argus_chat::{ChatOrchestrator, StoreSearch};
use argus_core::config::ArgusConfig;
use argus_store::SupplierStore;

use argus_api::routes;
use argus_api::state::AppState;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first so the log filter can fall back to its level.
    let config_file = args.resolve_config_path();
    let mut config = ArgusConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);

    // Tracing. Priority: RUST_LOG > --log-level flag > config value.
    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Argus v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Supplier store, seeded once at startup.
    let store = Arc::new(SupplierStore::new());
    store.initialize()?;

    // Chat orchestrator backed by the local store search.
    let search = StoreSearch::new(Arc::clone(&store));
    let orchestrator = ChatOrchestrator::new(Arc::new(search), config.chat.clone());

    let state = AppState::new(config.clone(), Arc::clone(&store), orchestrator);

    // === API server ===

    if let Err(e) = routes::start_server(&config, state).await {
        tracing::error!(error = %e, "API server failed to start");
        tracing::error!(
            "Is another instance already running? Try: ARGUS_PORT={} cargo run -p argus-app",
            config.server.port + 1
        );
        return Err(e.into());
    }

    Ok(())
}
