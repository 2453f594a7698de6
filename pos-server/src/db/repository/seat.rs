//! Seat Repository
//!
//! Seat lifecycle: free (status 0, no user) -> assigned (status 1, user set)
//! -> status counter incremented per stage -> reset back to free.

use super::{Entity, RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{SEAT_FREE, Seat};
use sqlx::AnyPool;

impl Entity for Seat {
    const NAME: &'static str = "Seat";
    const TABLE: &'static str = "seat";
    const KEY: &'static str = "seat_id";
    const COLUMNS: &'static str = "seat_id, seat_status, user_id";
    const NOT_FOUND: ErrorCode = ErrorCode::SeatNotFound;
}

pub async fn find_all(pool: &AnyPool) -> RepoResult<Vec<Seat>> {
    super::find_all::<Seat>(pool).await
}

/// Seats with a status of 1 or more
pub async fn find_occupied(pool: &AnyPool) -> RepoResult<Vec<Seat>> {
    let rows = sqlx::query_as::<_, Seat>(
        "SELECT seat_id, seat_status, user_id FROM seat WHERE seat_status >= 1 ORDER BY seat_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<Seat>> {
    super::find_by_key::<Seat>(pool, id).await
}

const ASSIGN_ATTEMPTS: usize = 2;

/// Assign a free seat to a user
///
/// The write only applies while the seat is free, so two concurrent
/// assignments cannot both win. A seat that reads free after a lost write
/// was released in between and is tried once more.
pub async fn assign(pool: &AnyPool, id: i64, user_id: i64) -> RepoResult<Seat> {
    for _ in 0..ASSIGN_ATTEMPTS {
        let result = sqlx::query(
            "UPDATE seat SET seat_status = 1, user_id = ? WHERE seat_id = ? AND seat_status = ?",
        )
        .bind(user_id)
        .bind(id)
        .bind(SEAT_FREE)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            return super::require::<Seat>(pool, id).await;
        }

        match find_by_id(pool, id).await? {
            None => return Err(Seat::not_found(id)),
            Some(seat) if !seat.is_free() => {
                return Err(RepoError::Conflict(
                    ErrorCode::SeatOccupied,
                    format!(
                        "Seat {} is occupied (status {})",
                        seat.seat_id, seat.seat_status
                    ),
                ));
            }
            Some(_) => {
                tracing::debug!(seat_id = id, "Seat released during assignment, retrying");
            }
        }
    }

    Err(RepoError::Conflict(
        ErrorCode::SeatOccupied,
        format!("Seat {id} changed while being assigned"),
    ))
}

/// Advance the status counter by one, keeping the occupant
pub async fn increment_status(pool: &AnyPool, id: i64) -> RepoResult<Seat> {
    sqlx::query("UPDATE seat SET seat_status = seat_status + 1 WHERE seat_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    super::require::<Seat>(pool, id).await
}

/// Free the seat: status 0, occupant cleared
pub async fn reset(pool: &AnyPool, id: i64) -> RepoResult<Seat> {
    // MySQL reports 0 affected rows for an already-free seat, so existence is
    // decided by the re-read rather than the row count
    sqlx::query("UPDATE seat SET seat_status = ?, user_id = NULL WHERE seat_id = ?")
        .bind(SEAT_FREE)
        .bind(id)
        .execute(pool)
        .await?;
    super::require::<Seat>(pool, id).await
}
