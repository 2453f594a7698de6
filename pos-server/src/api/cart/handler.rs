//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartCleared, CartItem};

use crate::db::repository::cart;
use crate::state::AppState;

fn check_qty(item: &CartItem) -> AppResult<()> {
    if item.item_qty < 1 {
        return Err(
            AppError::with_message(ErrorCode::ValueOutOfRange, "item_qty must be at least 1")
                .with_detail("item_qty", item.item_qty),
        );
    }
    Ok(())
}

/// POST /api/cartItem
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<CartItem>,
) -> AppResult<Json<CartItem>> {
    check_qty(&payload)?;
    let item = cart::add(&state.db.pool, payload).await?;
    Ok(Json(item))
}

/// GET /api/cartItem/{user_id}/{food_id}
pub async fn get_line(
    State(state): State<AppState>,
    Path((user_id, food_id)): Path<(i64, i64)>,
) -> AppResult<Json<CartItem>> {
    let item = cart::find(&state.db.pool, user_id, food_id)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::CartItemNotFound)
                .with_detail("user_id", user_id)
                .with_detail("food_id", food_id)
        })?;
    Ok(Json(item))
}

/// GET /api/cartItem/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<CartItem>>> {
    let items = cart::find_by_user(&state.db.pool, user_id).await?;
    Ok(Json(items))
}

/// PUT /api/cartItem
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<CartItem>,
) -> AppResult<Json<CartItem>> {
    check_qty(&payload)?;
    let item = cart::update_qty(&state.db.pool, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/cartItem/{user_id}/{food_id}
pub async fn delete_line(
    State(state): State<AppState>,
    Path((user_id, food_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    cart::delete(&state.db.pool, user_id, food_id).await?;
    Ok(Json(true))
}

/// DELETE /api/cartItem/{user_id}
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<CartCleared>> {
    let deleted = cart::clear(&state.db.pool, user_id).await?;
    Ok(Json(CartCleared { user_id, deleted }))
}
