//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use auth::{AuthConfig, InMemoryAuthRepository, PgAuthRepository};
use books::{BooksConfig, InMemoryBookRepository, PgBookRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ApiConfig, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,books=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;
    let books_config = BooksConfig::from_env()?;

    tokio::fs::create_dir_all(&books_config.upload_dir).await?;

    let origins = api_config.frontend_origins.clone();
    let app = match &api_config.storage {
        Storage::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            app::build_router(
                PgAuthRepository::new(pool.clone()),
                PgBookRepository::new(pool),
                auth_config,
                books_config,
                origins,
            )
        }
        Storage::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            app::build_router(
                InMemoryAuthRepository::new(),
                InMemoryBookRepository::new(),
                auth_config,
                books_config,
                origins,
            )
        }
    };

    // Start server
    let addr = api_config.bind_addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
