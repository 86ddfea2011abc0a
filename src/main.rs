use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod error;
mod models;
mod query;
mod routes;

use catalog::Catalog;
use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MindStats API server...");

    let config = Config::from_env()?;

    let catalog = Catalog::builtin();
    catalog.validate()?;

    tracing::info!(
        players = catalog.players.len(),
        environment = %config.environment,
        "Catalog loaded."
    );

    let addr = config.addr();

    // CORS configuration for the dashboard frontend
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer());

    let app = routes::router(AppState::new(catalog, &config.environment)).layer(middleware);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
