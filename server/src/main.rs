//! Items server: connects the store, ensures the `items` table, and serves the API.
//!
//! Run from repo root: `cargo run -p items-server`

use items_api::{app, AppConfig, AppState, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("items_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = Store::connect(&config.database_url).await?;
    store.ensure_items_table().await?;

    let router = app(AppState::new(store), &config)?;
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        allowed_origin = %config.allowed_origin,
        "items server listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, starting shutdown"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
