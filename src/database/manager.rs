use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the shared connection pool from configuration.
///
/// The pool connects lazily so the server can come up before the database
/// does; `/health` reports degraded until the first successful ping.
pub fn connect(config: &AppConfig) -> Result<PgPool, StoreError> {
    let url = config
        .database
        .url
        .as_deref()
        .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_lazy(url)?;

    Ok(pool)
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)",
    "CREATE TABLE IF NOT EXISTS ideas (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        summary TEXT NOT NULL,
        tags TEXT[] NOT NULL DEFAULT '{}',
        owner UUID NOT NULL REFERENCES users (id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
];

/// Create tables and indexes if they do not exist yet
pub async fn bootstrap(pool: &PgPool) -> Result<(), StoreError> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("database schema ready");
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
