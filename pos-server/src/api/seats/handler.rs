//! Seat API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{Seat, SeatAssign};

use crate::db::repository::{Entity, seat};
use crate::state::AppState;

/// GET /api/seats
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Seat>>> {
    let seats = seat::find_all(&state.db.pool).await?;
    Ok(Json(seats))
}

/// GET /api/seats/occ
pub async fn list_occupied(State(state): State<AppState>) -> AppResult<Json<Vec<Seat>>> {
    let seats = seat::find_occupied(&state.db.pool).await?;
    Ok(Json(seats))
}

/// GET /api/seats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Seat>> {
    let seat = seat::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| Seat::not_found(id))?;
    Ok(Json(seat))
}

/// POST /api/seats/{id} - assign a free seat
pub async fn assign(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SeatAssign>,
) -> AppResult<Json<Seat>> {
    let seat = seat::assign(&state.db.pool, id, payload.user_id).await?;
    tracing::info!(seat_id = id, user_id = payload.user_id, "Seat assigned");
    Ok(Json(seat))
}

/// PUT /api/seats/status/{id}
pub async fn increment_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Seat>> {
    let seat = seat::increment_status(&state.db.pool, id).await?;
    Ok(Json(seat))
}

/// PUT /api/seats/restatus/{id} - free the seat
pub async fn reset(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Seat>> {
    let seat = seat::reset(&state.db.pool, id).await?;
    tracing::info!(seat_id = id, "Seat freed");
    Ok(Json(seat))
}
