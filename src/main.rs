//! GameFlix server entry point.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gameflix::adapters::auth::HmacPasswordHasher;
use gameflix::adapters::http::{api_router, AppState};
use gameflix::adapters::memory::InMemorySessionStore;
use gameflix::adapters::postgres::{
    PostgresGameRepository, PostgresLibraryRepository, PostgresReviewRepository,
    PostgresUserRepository,
};
use gameflix::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("database pool connected");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState {
        games: Arc::new(PostgresGameRepository::new(pool.clone())),
        library: Arc::new(PostgresLibraryRepository::new(pool.clone())),
        reviews: Arc::new(PostgresReviewRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool)),
        // Sessions are ephemeral server-side state; they do not survive a
        // restart, matching the plan-checkout flow's expectations.
        sessions: Arc::new(InMemorySessionStore::new()),
        password_hasher: Arc::new(HmacPasswordHasher::new(&config.auth.password_pepper)),
    };

    let cors = {
        let origins = config.server.cors_origins_list();
        if origins.is_empty() {
            CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
        } else {
            let parsed: Vec<_> = origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
