//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Food, FoodCreate, FoodUpdate, is_valid_price};

use crate::db::repository::{Entity, food};
use crate::state::AppState;

fn check_price(price: f64) -> AppResult<()> {
    if is_valid_price(price) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::FoodInvalidPrice).with_detail("price", price))
    }
}

/// GET /api/foods
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Food>>> {
    let foods = food::find_all(&state.db.pool).await?;
    Ok(Json(foods))
}

/// GET /api/foods/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Food>> {
    let food = food::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| Food::not_found(id))?;
    Ok(Json(food))
}

/// POST /api/foods
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<FoodCreate>,
) -> AppResult<Json<Food>> {
    check_price(payload.price)?;
    check_price(payload.discount)?;
    let food = food::create(&state.db.pool, payload).await?;
    tracing::info!(food_id = food.food_id, name = %food.name, "Food created");
    Ok(Json(food))
}

/// PUT /api/foods/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<FoodUpdate>,
) -> AppResult<Json<Food>> {
    if let Some(price) = payload.price {
        check_price(price)?;
    }
    if let Some(discount) = payload.discount {
        check_price(discount)?;
    }
    let food = food::update(&state.db.pool, id, payload).await?;
    Ok(Json(food))
}

/// DELETE /api/foods/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    food::delete(&state.db.pool, id).await?;
    tracing::info!(food_id = id, "Food deleted");
    Ok(Json(true))
}
