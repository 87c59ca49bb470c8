//! Gateway server: loads settings and the resource config, opens the document
//! store once, and serves the API until Ctrl-C.
//!
//! Run from repo root: `cargo run -p docstore-gateway-server`

use docstore_gateway::{app, load_config, resolve, store, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docstore_gateway=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let config = load_config(settings.config_path.as_deref(), &settings.domain).await?;
    let model = resolve(&config)?;
    let database = settings.database_name.clone().unwrap_or_else(|| model.database.clone());
    tracing::info!(api = %model.name, %database, resources = model.resources.len(), "resource config loaded");

    let store = store::open(&settings, &database).await?;
    match store.ping().await {
        Ok(()) => tracing::info!("Successfully connected to the document store."),
        Err(e) => tracing::error!(error = %e, "Could not connect to the document store"),
    }

    let state = AppState::new(store.clone(), model).with_strict_ids(settings.strict_ids);
    let static_dir = settings.static_dir.is_dir().then_some(settings.static_dir.as_path());
    let router = app(state, static_dir);

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
