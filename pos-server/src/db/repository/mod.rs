//! Repository Module
//!
//! One accessor module per table. Every accessor is a free async function
//! taking the pool and issuing a single statement (mutations re-read the row
//! they touched so callers get the current state back).

pub mod bill_details;
pub mod bill_status;
pub mod booking;
pub mod cart;
pub mod food;
pub mod seat;
pub mod staff;
pub mod user;

use shared::error::ErrorCode;
use sqlx::any::AnyRow;
use sqlx::error::ErrorKind;
use sqlx::{AnyPool, FromRow};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {1}")]
    NotFound(ErrorCode, String),

    /// Duplicate key or a state transition the row does not allow
    #[error("Conflict: {1}")]
    Conflict(ErrorCode, String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

impl RepoError {
    /// Give a generic duplicate-key conflict a table-specific code
    pub fn on_duplicate(self, code: ErrorCode, message: impl Into<String>) -> Self {
        match self {
            RepoError::Conflict(ErrorCode::AlreadyExists, _) => {
                RepoError::Conflict(code, message.into())
            }
            other => other,
        }
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.kind() == ErrorKind::UniqueViolation => {
                RepoError::Conflict(ErrorCode::AlreadyExists, db.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepoError::Unavailable(err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// A table row with a single integer key
pub trait Entity: for<'r> FromRow<'r, AnyRow> + Send + Unpin {
    /// Human-readable name used in error messages
    const NAME: &'static str;
    const TABLE: &'static str;
    const KEY: &'static str;
    /// Column list in struct field order
    const COLUMNS: &'static str;
    const ORDER_BY: &'static str = Self::KEY;
    const NOT_FOUND: ErrorCode = ErrorCode::NotFound;

    fn not_found(key: i64) -> RepoError {
        RepoError::NotFound(Self::NOT_FOUND, format!("{} {} not found", Self::NAME, key))
    }
}

/// All rows of a table
pub async fn find_all<E: Entity>(pool: &AnyPool) -> RepoResult<Vec<E>> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        E::COLUMNS,
        E::TABLE,
        E::ORDER_BY
    );
    let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Row by primary key
pub async fn find_by_key<E: Entity>(pool: &AnyPool, key: i64) -> RepoResult<Option<E>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        E::COLUMNS,
        E::TABLE,
        E::KEY
    );
    let row = sqlx::query_as::<_, E>(&sql)
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Row by primary key, `NotFound` when absent
pub async fn require<E: Entity>(pool: &AnyPool, key: i64) -> RepoResult<E> {
    find_by_key::<E>(pool, key)
        .await?
        .ok_or_else(|| E::not_found(key))
}

/// Rows whose integer `column` equals `value`
pub async fn find_all_by<E: Entity>(
    pool: &AnyPool,
    column: &'static str,
    value: i64,
) -> RepoResult<Vec<E>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ? ORDER BY {}",
        E::COLUMNS,
        E::TABLE,
        column,
        E::ORDER_BY
    );
    let rows = sqlx::query_as::<_, E>(&sql)
        .bind(value)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Delete by primary key, `NotFound` when nothing was removed
pub async fn delete_by_key<E: Entity>(pool: &AnyPool, key: i64) -> RepoResult<()> {
    let sql = format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::KEY);
    let result = sqlx::query(&sql).bind(key).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(E::not_found(key));
    }
    Ok(())
}

/// Key generated by the last insert
pub(crate) fn inserted_id(result: &sqlx::any::AnyQueryResult) -> RepoResult<i64> {
    result
        .last_insert_id()
        .ok_or_else(|| RepoError::Database("Driver returned no generated key".into()))
}
