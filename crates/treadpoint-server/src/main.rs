mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use treadpoint_pricing::PriceBook;
use treadpoint_store::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = treadpoint_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let categories = Arc::new(treadpoint_core::load_categories(&config.categories_path)?);

    // The directory is the page's reason to exist: refuse to start without
    // it. A broken price book only degrades the pricing widget.
    let locations = treadpoint_store::load_locations(&config.locations_path).await?;
    let price_book = match treadpoint_store::load_price_book(&config.prices_path).await {
        Ok(book) => book,
        Err(e) => {
            tracing::error!(error = %e, "price book unavailable, pricing endpoints degraded");
            PriceBook::empty()
        }
    };

    let state = AppState {
        snapshot: Arc::new(Snapshot {
            locations,
            price_book,
        }),
        categories,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "treadpoint server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
