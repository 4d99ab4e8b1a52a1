// ABOUTME: Entry point for the pessoas binary.
// ABOUTME: Loads config, initializes tracing, prepares the database, and starts the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use pessoas_server::{AppState, PessoasConfig, create_router};
use pessoas_store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pessoas=debug,tower_http=debug")),
        )
        .init();

    let config = PessoasConfig::from_env()?;
    tracing::info!(db = %config.db_path.display(), bind = %config.bind, "pessoas starting up");

    let store = RecordStore::new(&config.db_path);
    let outcome = store
        .ensure_schema()
        .with_context(|| format!("preparing database {}", config.db_path.display()))?;
    tracing::debug!(?outcome, "schema checked");

    if config.seed {
        let seeded = store.seed_if_empty().context("seeding empty table")?;
        if seeded > 0 {
            tracing::info!(seeded, "inserted placeholder records");
        }
    }

    let app = create_router(Arc::new(AppState::new(store)));
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!("listening on {}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
