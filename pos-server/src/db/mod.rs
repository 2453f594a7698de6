//! Database Module
//!
//! Owns the connection pool. Production runs against MySQL; the `Any` driver
//! lets the test suite run the same statements against in-memory SQLite.

pub mod repository;

use std::time::{Duration, Instant};

use shared::error::AppError;
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::config::Config;

/// Database service, owns the connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: AnyPool,
}

impl DbService {
    /// Connect using the configured URL and pool limits
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        Self::connect_url(
            &config.database_url(),
            config.db_max_connections,
            Duration::from_secs(config.db_acquire_timeout_secs),
        )
        .await
    }

    /// Connect to an explicit URL
    ///
    /// An in-memory SQLite URL is pinned to a single long-lived connection so
    /// every query sees the same database.
    pub async fn connect_url(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();

        let mut options = AnyPoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(acquire_timeout);
        if url.starts_with("sqlite::memory:") {
            options = options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options
            .connect(url)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            backend = backend_name(url),
            max_connections,
            "Database connection established"
        );

        Ok(Self { pool })
    }

    /// Round-trip a trivial statement, returning the latency
    pub async fn ping(&self) -> Result<Duration, sqlx::Error> {
        let started = Instant::now();
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(started.elapsed())
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

fn backend_name(url: &str) -> &'static str {
    if url.starts_with("mysql:") {
        "mysql"
    } else if url.starts_with("sqlite:") {
        "sqlite"
    } else {
        "other"
    }
}

/// Fresh in-memory database with the full schema applied
#[cfg(test)]
pub(crate) async fn test_pool() -> AnyPool {
    let db = DbService::connect_url("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .unwrap();
    for statement in include_str!("../../schema/sqlite.sql").split(';') {
        if statement.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with("--")) {
            continue;
        }
        sqlx::query(statement).execute(&db.pool).await.unwrap();
    }
    db.pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_database_is_shared_across_queries() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO seat (seat_id) VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seat")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn ping_reports_latency() {
        let db = DbService {
            pool: test_pool().await,
        };
        assert!(db.ping().await.is_ok());
        db.close().await;
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    async fn unreachable_database_fails_to_connect() {
        let result = DbService::connect_url(
            "sqlite:///nonexistent-dir/pos/restaurant.db",
            1,
            Duration::from_secs(1),
        )
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn backend_is_named_from_url() {
        assert_eq!(backend_name("mysql://root@localhost/restaurant"), "mysql");
        assert_eq!(backend_name("sqlite::memory:"), "sqlite");
    }
}
