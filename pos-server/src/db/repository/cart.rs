//! Cart Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::CartItem;
use sqlx::AnyPool;

// Keyed by (user_id, food_id), so the single-key `Entity` helpers do not apply.

fn line_not_found(user_id: i64, food_id: i64) -> RepoError {
    RepoError::NotFound(
        ErrorCode::CartItemNotFound,
        format!("Cart item (user {user_id}, food {food_id}) not found"),
    )
}

pub async fn find(pool: &AnyPool, user_id: i64, food_id: i64) -> RepoResult<Option<CartItem>> {
    let row = sqlx::query_as::<_, CartItem>(
        "SELECT user_id, food_id, item_qty FROM cart WHERE user_id = ? AND food_id = ?",
    )
    .bind(user_id)
    .bind(food_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_user(pool: &AnyPool, user_id: i64) -> RepoResult<Vec<CartItem>> {
    let rows = sqlx::query_as::<_, CartItem>(
        "SELECT user_id, food_id, item_qty FROM cart WHERE user_id = ? ORDER BY food_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Add a new line; an existing (user, food) line is a conflict
pub async fn add(pool: &AnyPool, item: CartItem) -> RepoResult<CartItem> {
    sqlx::query("INSERT INTO cart (user_id, food_id, item_qty) VALUES (?, ?, ?)")
        .bind(item.user_id)
        .bind(item.food_id)
        .bind(item.item_qty)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e).on_duplicate(
                ErrorCode::CartItemExists,
                format!(
                    "Cart item (user {}, food {}) already exists",
                    item.user_id, item.food_id
                ),
            )
        })?;

    find(pool, item.user_id, item.food_id)
        .await?
        .ok_or_else(|| line_not_found(item.user_id, item.food_id))
}

/// Set the quantity of an existing line
pub async fn update_qty(pool: &AnyPool, item: CartItem) -> RepoResult<CartItem> {
    sqlx::query("UPDATE cart SET item_qty = ? WHERE user_id = ? AND food_id = ?")
        .bind(item.item_qty)
        .bind(item.user_id)
        .bind(item.food_id)
        .execute(pool)
        .await?;

    find(pool, item.user_id, item.food_id)
        .await?
        .ok_or_else(|| line_not_found(item.user_id, item.food_id))
}

pub async fn delete(pool: &AnyPool, user_id: i64, food_id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM cart WHERE user_id = ? AND food_id = ?")
        .bind(user_id)
        .bind(food_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(line_not_found(user_id, food_id));
    }
    Ok(())
}

/// Remove every line of a user's cart, returning how many went
pub async fn clear(pool: &AnyPool, user_id: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM cart WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn line(user_id: i64, food_id: i64, item_qty: i64) -> CartItem {
        CartItem {
            user_id,
            food_id,
            item_qty,
        }
    }

    #[tokio::test]
    async fn add_and_list_per_user() {
        let pool = test_pool().await;
        add(&pool, line(1, 20, 2)).await.unwrap();
        add(&pool, line(1, 10, 1)).await.unwrap();
        add(&pool, line(2, 10, 5)).await.unwrap();

        let items = find_by_user(&pool, 1).await.unwrap();
        assert_eq!(items, vec![line(1, 10, 1), line(1, 20, 2)]);
    }

    #[tokio::test]
    async fn adding_same_line_twice_conflicts() {
        let pool = test_pool().await;
        add(&pool, line(1, 10, 1)).await.unwrap();
        let err = add(&pool, line(1, 10, 3)).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(ErrorCode::CartItemExists, _)));
    }

    #[tokio::test]
    async fn update_quantity() {
        let pool = test_pool().await;
        add(&pool, line(1, 10, 1)).await.unwrap();

        let item = update_qty(&pool, line(1, 10, 4)).await.unwrap();
        assert_eq!(item.item_qty, 4);

        let err = update_qty(&pool, line(1, 99, 4)).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(ErrorCode::CartItemNotFound, _)));
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let pool = test_pool().await;
        add(&pool, line(1, 10, 1)).await.unwrap();
        add(&pool, line(1, 11, 1)).await.unwrap();
        add(&pool, line(1, 12, 1)).await.unwrap();
        add(&pool, line(2, 10, 1)).await.unwrap();

        delete(&pool, 1, 10).await.unwrap();
        assert!(delete(&pool, 1, 10).await.is_err());

        assert_eq!(clear(&pool, 1).await.unwrap(), 2);
        assert_eq!(clear(&pool, 1).await.unwrap(), 0);
        assert_eq!(find_by_user(&pool, 2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lines_are_addressed_by_user_and_food() {
        let pool = test_pool().await;
        add(&pool, line(1, 10, 1)).await.unwrap();
        add(&pool, line(1, 11, 3)).await.unwrap();

        assert_eq!(find(&pool, 1, 11).await.unwrap(), Some(line(1, 11, 3)));

        delete(&pool, 1, 10).await.unwrap();
        assert_eq!(find(&pool, 1, 10).await.unwrap(), None);
        assert_eq!(find_by_user(&pool, 1).await.unwrap(), vec![line(1, 11, 3)]);
    }
}
