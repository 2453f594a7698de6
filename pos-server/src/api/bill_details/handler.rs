//! Bill Detail API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::BillDetail;

use crate::db::repository::bill_details;
use crate::state::AppState;

/// POST /api/billdetails
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BillDetail>,
) -> AppResult<Json<BillDetail>> {
    if payload.item_qty < 1 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "item_qty must be at least 1",
        ));
    }
    let line = bill_details::create(&state.db.pool, payload).await?;
    Ok(Json(line))
}

/// GET /api/billdetails/{id}
pub async fn list_by_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<i64>,
) -> AppResult<Json<Vec<BillDetail>>> {
    let lines = bill_details::find_by_bill(&state.db.pool, bill_id).await?;
    Ok(Json(lines))
}
