//! Bill Detail Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::BillDetail;
use sqlx::AnyPool;

// Keyed by (bill_id, food_id), so the single-key `Entity` helpers do not apply.

pub async fn create(pool: &AnyPool, line: BillDetail) -> RepoResult<BillDetail> {
    sqlx::query("INSERT INTO billdetails (bill_id, food_id, item_qty) VALUES (?, ?, ?)")
        .bind(line.bill_id)
        .bind(line.food_id)
        .bind(line.item_qty)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e).on_duplicate(
                ErrorCode::BillDetailExists,
                format!(
                    "Bill {} already has a line for food {}",
                    line.bill_id, line.food_id
                ),
            )
        })?;
    Ok(line)
}

pub async fn find_by_bill(pool: &AnyPool, bill_id: i64) -> RepoResult<Vec<BillDetail>> {
    let rows = sqlx::query_as::<_, BillDetail>(
        "SELECT bill_id, food_id, item_qty FROM billdetails WHERE bill_id = ? ORDER BY food_id",
    )
    .bind(bill_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn line(bill_id: i64, food_id: i64, item_qty: i64) -> BillDetail {
        BillDetail {
            bill_id,
            food_id,
            item_qty,
        }
    }

    #[tokio::test]
    async fn lines_are_grouped_by_bill() {
        let pool = test_pool().await;
        create(&pool, line(7, 2, 1)).await.unwrap();
        create(&pool, line(7, 1, 3)).await.unwrap();
        create(&pool, line(8, 1, 1)).await.unwrap();

        let lines = find_by_bill(&pool, 7).await.unwrap();
        assert_eq!(lines, vec![line(7, 1, 3), line(7, 2, 1)]);
        assert!(find_by_bill(&pool, 9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_line_conflicts() {
        let pool = test_pool().await;
        create(&pool, line(7, 1, 1)).await.unwrap();
        let err = create(&pool, line(7, 1, 2)).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(ErrorCode::BillDetailExists, _)));
    }
}
