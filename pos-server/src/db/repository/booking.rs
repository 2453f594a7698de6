//! Booking Repository

use super::{Entity, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Booking, BookingCreate};
use shared::util::now_millis;
use sqlx::AnyPool;

impl Entity for Booking {
    const NAME: &'static str = "Booking";
    const TABLE: &'static str = "booking";
    const KEY: &'static str = "book_id";
    const COLUMNS: &'static str = "book_id, book_name, book_phone, book_people, book_tables, user_id, book_when, book_note, created_at";
    const NOT_FOUND: ErrorCode = ErrorCode::BookingNotFound;
}

pub async fn create(pool: &AnyPool, data: BookingCreate) -> RepoResult<Booking> {
    let result = sqlx::query(
        "INSERT INTO booking (book_name, book_phone, book_people, book_tables, user_id, book_when, book_note, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(data.book_name)
    .bind(data.book_phone)
    .bind(data.book_people)
    .bind(data.book_tables)
    .bind(data.user_id)
    .bind(data.book_when)
    .bind(data.book_note)
    .bind(now_millis())
    .execute(pool)
    .await?;

    let id = super::inserted_id(&result)?;
    super::require::<Booking>(pool, id).await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<Booking>> {
    super::find_by_key::<Booking>(pool, id).await
}

pub async fn find_by_user(pool: &AnyPool, user_id: i64) -> RepoResult<Vec<Booking>> {
    super::find_all_by::<Booking>(pool, "user_id", user_id).await
}
