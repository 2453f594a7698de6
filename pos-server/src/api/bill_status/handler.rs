//! Bill Status API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;
use shared::error::{AppError, AppResult};
use shared::models::{BillStatus, BillStatusCreate, NewestBill};
use shared::util::day_window_millis;

use crate::db::repository::{Entity, bill_status};
use crate::state::AppState;

/// GET /api/billstatus/new
pub async fn newest(State(state): State<AppState>) -> AppResult<Json<NewestBill>> {
    let bill_id = bill_status::newest_id(&state.db.pool).await?;
    Ok(Json(NewestBill { bill_id }))
}

/// GET /api/billstatus/today
pub async fn today(State(state): State<AppState>) -> AppResult<Json<Vec<BillStatus>>> {
    let (start, end) = day_window_millis(Local::now());
    let bills = bill_status::find_between(&state.db.pool, start, end).await?;
    Ok(Json(bills))
}

/// GET /api/billstatus
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BillStatus>>> {
    let bills = bill_status::find_all(&state.db.pool).await?;
    Ok(Json(bills))
}

/// POST /api/billstatus
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BillStatusCreate>,
) -> AppResult<Json<BillStatus>> {
    for (field, value) in [
        ("bill_total", payload.bill_total),
        ("bill_discount", payload.bill_discount),
        ("bill_delivery", payload.bill_delivery),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::validation(format!("{field} must not be negative"))
                .with_detail("field", field));
        }
    }
    let bill = bill_status::create(&state.db.pool, payload).await?;
    tracing::info!(
        bill_id = bill.bill_id,
        user_id = bill.user_id,
        total = bill.bill_total,
        "Bill placed"
    );
    Ok(Json(bill))
}

/// GET /api/billstatus/user/{id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<BillStatus>>> {
    let bills = bill_status::find_by_user(&state.db.pool, user_id).await?;
    Ok(Json(bills))
}

/// GET /api/billstatus/bill/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BillStatus>> {
    let bill = bill_status::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| BillStatus::not_found(id))?;
    Ok(Json(bill))
}

/// PUT /api/billstatus/{id}
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BillStatus>> {
    let bill = bill_status::advance(&state.db.pool, id).await?;
    tracing::info!(bill_id = id, stage = bill.bill_status, "Bill advanced");
    Ok(Json(bill))
}

/// PUT /api/billstatus/paid/{id}
pub async fn mark_paid(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BillStatus>> {
    let bill = bill_status::mark_paid(&state.db.pool, id).await?;
    tracing::info!(bill_id = id, "Bill paid");
    Ok(Json(bill))
}

/// PUT /api/billstatus/cancel/{id}
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BillStatus>> {
    let bill = bill_status::cancel(&state.db.pool, id).await?;
    tracing::info!(bill_id = id, "Bill cancelled");
    Ok(Json(bill))
}
