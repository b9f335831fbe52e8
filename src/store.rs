//! Database handle: one long-lived pool built at startup and shared through `AppState`.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// Pool over the concrete driver named by the URL scheme.
/// MySQL in production; SQLite for tests and local runs without a server.
#[derive(Clone, Debug)]
pub enum DbPool {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

impl DbPool {
    pub async fn close(&self) {
        match self {
            DbPool::MySql(p) => p.close().await,
            DbPool::Sqlite(p) => p.close().await,
        }
    }

    pub fn driver(&self) -> &'static str {
        match self {
            DbPool::MySql(_) => "mysql",
            DbPool::Sqlite(_) => "sqlite",
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            DbPool::MySql(p) => p.is_closed(),
            DbPool::Sqlite(p) => p.is_closed(),
        }
    }
}

/// Connect to `database_url` (`mysql://...` or `sqlite:...`).
/// Connections never expire on their own, so `max_connections = 1` keeps a single
/// persistent session for the life of the process.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, AppError> {
    if database_url.starts_with("sqlite:") {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(database_url)
            .await?;
        return Ok(DbPool::Sqlite(pool));
    }
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect(database_url)
        .await?;
    Ok(DbPool::MySql(pool))
}

pub async fn connect_with(settings: &Settings) -> Result<DbPool, AppError> {
    connect(&settings.database_url, settings.max_connections).await
}

/// Single round trip used by the readiness route.
pub async fn ping(pool: &DbPool) -> Result<(), AppError> {
    match pool {
        DbPool::MySql(p) => {
            sqlx::query("SELECT 1").execute(p).await?;
        }
        DbPool::Sqlite(p) => {
            sqlx::query("SELECT 1").execute(p).await?;
        }
    }
    Ok(())
}
