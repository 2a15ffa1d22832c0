use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use framing::catalog::ProductFamily;
use framing::config::Config;
use framing::routes::build_router;
use framing::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Framing API v{}", env!("CARGO_PKG_VERSION"));

    // Catalogs are validated here; a malformed table aborts startup
    let state = AppState::builtin(config.clone())?;
    for family in ProductFamily::ALL {
        let catalog = state.catalog(family);
        info!(
            family = ?family,
            layouts = catalog.list_layouts().len(),
            sizes = catalog.sizes().len(),
            "Catalog loaded"
        );
    }
    info!(
        "Mat sheet limits: {}x{} in, fallback frame price {}",
        config.sheet_limits.max_width, config.sheet_limits.max_height, config.fallback_frame_price
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
