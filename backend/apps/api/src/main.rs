//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::time::Duration;

use auth::{PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::password::Argon2Hasher;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use story::{PgStoryRepository, story_router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::{PgUserRepository, user_router};

use crate::config::ServerConfig;

const DB_CONNECT_ATTEMPTS: u32 = 5;

const DB_CONNECT_BACKOFF: Duration = Duration::from_secs(2);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,user=info,story=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let pool = connect_with_retry(&config.database_url).await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired refresh tokens
    // Errors here should not prevent server startup
    let auth_store_for_cleanup = PgAuthRepository::new(pool.clone());
    if let Err(e) = auth_store_for_cleanup.cleanup_expired().await {
        tracing::warn!(
            error = %e,
            "Refresh token cleanup failed, continuing anyway"
        );
    }

    let hasher = Argon2Hasher::new(config.auth.password_pepper.clone());

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/user",
            user_router(PgUserRepository::new(pool.clone()), hasher.clone()),
        )
        .nest(
            "/api/story",
            story_router(PgStoryRepository::new(pool.clone())),
        )
        .nest(
            "/api/auth",
            auth_router(PgAuthRepository::new(pool.clone()), hasher, config.auth),
        )
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect to Postgres, retrying while the database is still starting up.
async fn connect_with_retry(database_url: &str) -> anyhow::Result<PgPool> {
    let mut attempt = 1;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < DB_CONNECT_ATTEMPTS => {
                tracing::warn!(
                    attempt,
                    error = %e,
                    "Database connection failed, retrying in {:?}",
                    DB_CONNECT_BACKOFF
                );
                attempt += 1;
                tokio::time::sleep(DB_CONNECT_BACKOFF).await;
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!(
                    "could not connect to database after {DB_CONNECT_ATTEMPTS} attempts"
                )));
            }
        }
    }
}
