//! EasyTests server entry point

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easytests::{
    config::CONFIG,
    db::{self, Mappers},
    handlers,
    services::Services,
    state::AppState,
    views::Views,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EasyTests server...");

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&CONFIG.database).await?;
    db::ping(&pool).await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    let services = Services::new(Mappers::postgres(pool));
    let views = Views::new()?;
    let state = AppState::new(services, views, CONFIG.clone());

    let app = handlers::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
