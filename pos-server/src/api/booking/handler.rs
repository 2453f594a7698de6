//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Booking, BookingCreate};

use crate::db::repository::{Entity, booking};
use crate::state::AppState;

/// POST /api/booking
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    if payload.book_people < 1 || payload.book_tables < 1 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "book_people and book_tables must be at least 1",
        ));
    }
    let booking = booking::create(&state.db.pool, payload).await?;
    tracing::info!(
        book_id = booking.book_id,
        people = booking.book_people,
        when = %booking.book_when,
        "Booking created"
    );
    Ok(Json(booking))
}

/// GET /api/booking/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = booking::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| Booking::not_found(id))?;
    Ok(Json(booking))
}

/// GET /api/booking/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking::find_by_user(&state.db.pool, user_id).await?;
    Ok(Json(bookings))
}
