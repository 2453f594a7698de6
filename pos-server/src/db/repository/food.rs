//! Food Repository

use super::{Entity, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Food, FoodCreate, FoodUpdate};
use sqlx::AnyPool;

impl Entity for Food {
    const NAME: &'static str = "Food";
    const TABLE: &'static str = "food";
    const KEY: &'static str = "food_id";
    const COLUMNS: &'static str =
        "food_id, name, price, discount, description, category, food_type, status, image";
    const NOT_FOUND: ErrorCode = ErrorCode::FoodNotFound;
}

pub async fn find_all(pool: &AnyPool) -> RepoResult<Vec<Food>> {
    super::find_all::<Food>(pool).await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<Food>> {
    super::find_by_key::<Food>(pool, id).await
}

pub async fn create(pool: &AnyPool, data: FoodCreate) -> RepoResult<Food> {
    let result = sqlx::query(
        "INSERT INTO food (name, price, discount, description, category, food_type, status, image) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(data.name)
    .bind(data.price)
    .bind(data.discount)
    .bind(data.description)
    .bind(data.category)
    .bind(data.food_type)
    .bind(data.status)
    .bind(data.image)
    .execute(pool)
    .await?;

    let id = super::inserted_id(&result)?;
    super::require::<Food>(pool, id).await
}

/// Apply the fields present in `data`; absent fields keep their value
pub async fn update(pool: &AnyPool, id: i64, data: FoodUpdate) -> RepoResult<Food> {
    sqlx::query(
        "UPDATE food SET name = COALESCE(?, name), price = COALESCE(?, price), discount = COALESCE(?, discount), description = COALESCE(?, description), category = COALESCE(?, category), food_type = COALESCE(?, food_type), status = COALESCE(?, status), image = COALESCE(?, image) WHERE food_id = ?",
    )
    .bind(data.name)
    .bind(data.price)
    .bind(data.discount)
    .bind(data.description)
    .bind(data.category)
    .bind(data.food_type)
    .bind(data.status)
    .bind(data.image)
    .bind(id)
    .execute(pool)
    .await?;

    super::require::<Food>(pool, id).await
}

pub async fn delete(pool: &AnyPool, id: i64) -> RepoResult<()> {
    super::delete_by_key::<Food>(pool, id).await
}
