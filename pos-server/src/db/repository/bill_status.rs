//! Bill Status Repository
//!
//! Stage counter semantics: 0 is cancelled, 1 is placed, every advance adds
//! one. A cancelled bill accepts no further transitions.

use super::{Entity, RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{BILL_CANCELLED, BILL_PLACED, BillStatus, BillStatusCreate};
use shared::util::now_millis;
use sqlx::AnyPool;

impl Entity for BillStatus {
    const NAME: &'static str = "Bill";
    const TABLE: &'static str = "billstatus";
    const KEY: &'static str = "bill_id";
    const COLUMNS: &'static str = "bill_id, user_id, bill_phone, bill_address, bill_when, bill_method, bill_discount, bill_delivery, bill_total, bill_paid, bill_status";
    const NOT_FOUND: ErrorCode = ErrorCode::BillNotFound;
}

fn cancelled(bill_id: i64) -> RepoError {
    RepoError::Conflict(
        ErrorCode::BillCancelled,
        format!("Bill {bill_id} is cancelled"),
    )
}

/// Highest bill id, `None` on an empty table
pub async fn newest_id(pool: &AnyPool) -> RepoResult<Option<i64>> {
    let id: Option<i64> = sqlx::query_scalar("SELECT MAX(bill_id) FROM billstatus")
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Bills with `bill_when` in `[start, end)`
pub async fn find_between(pool: &AnyPool, start: i64, end: i64) -> RepoResult<Vec<BillStatus>> {
    let sql = format!(
        "SELECT {} FROM billstatus WHERE bill_when >= ? AND bill_when < ? ORDER BY bill_when, bill_id",
        BillStatus::COLUMNS
    );
    let rows = sqlx::query_as::<_, BillStatus>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_all(pool: &AnyPool) -> RepoResult<Vec<BillStatus>> {
    super::find_all::<BillStatus>(pool).await
}

pub async fn find_by_id(pool: &AnyPool, id: i64) -> RepoResult<Option<BillStatus>> {
    super::find_by_key::<BillStatus>(pool, id).await
}

pub async fn find_by_user(pool: &AnyPool, user_id: i64) -> RepoResult<Vec<BillStatus>> {
    super::find_all_by::<BillStatus>(pool, "user_id", user_id).await
}

/// Insert a placed bill, keeping a client-chosen id when one is given
pub async fn create(pool: &AnyPool, data: BillStatusCreate) -> RepoResult<BillStatus> {
    let bill_when = data.bill_when.unwrap_or_else(now_millis);
    let bill_paid = i64::from(data.bill_paid);

    let query = match data.bill_id {
        Some(id) => sqlx::query(
            "INSERT INTO billstatus (bill_id, user_id, bill_phone, bill_address, bill_when, bill_method, bill_discount, bill_delivery, bill_total, bill_paid, bill_status) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id),
        None => sqlx::query(
            "INSERT INTO billstatus (user_id, bill_phone, bill_address, bill_when, bill_method, bill_discount, bill_delivery, bill_total, bill_paid, bill_status) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        ),
    };

    let result = query
        .bind(data.user_id)
        .bind(data.bill_phone)
        .bind(data.bill_address)
        .bind(bill_when)
        .bind(data.bill_method)
        .bind(data.bill_discount)
        .bind(data.bill_delivery)
        .bind(data.bill_total)
        .bind(bill_paid)
        .bind(BILL_PLACED)
        .execute(pool)
        .await
        .map_err(|e| {
            RepoError::from(e).on_duplicate(
                ErrorCode::AlreadyExists,
                format!("Bill {} already exists", data.bill_id.unwrap_or_default()),
            )
        })?;

    let id = match data.bill_id {
        Some(id) => id,
        None => super::inserted_id(&result)?,
    };
    super::require::<BillStatus>(pool, id).await
}

/// Move the bill to its next stage
pub async fn advance(pool: &AnyPool, id: i64) -> RepoResult<BillStatus> {
    let result = sqlx::query(
        "UPDATE billstatus SET bill_status = bill_status + 1 WHERE bill_id = ? AND bill_status <> ?",
    )
    .bind(id)
    .bind(BILL_CANCELLED)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        let bill = super::require::<BillStatus>(pool, id).await?;
        return Err(cancelled(bill.bill_id));
    }
    super::require::<BillStatus>(pool, id).await
}

/// Flag an open bill as paid
pub async fn mark_paid(pool: &AnyPool, id: i64) -> RepoResult<BillStatus> {
    let result = sqlx::query(
        "UPDATE billstatus SET bill_paid = 1 WHERE bill_id = ? AND bill_paid = 0 AND bill_status <> ?",
    )
    .bind(id)
    .bind(BILL_CANCELLED)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        let bill = super::require::<BillStatus>(pool, id).await?;
        return Err(if bill.is_cancelled() {
            cancelled(bill.bill_id)
        } else {
            RepoError::Conflict(
                ErrorCode::BillAlreadyPaid,
                format!("Bill {} is already paid", bill.bill_id),
            )
        });
    }
    super::require::<BillStatus>(pool, id).await
}

pub async fn cancel(pool: &AnyPool, id: i64) -> RepoResult<BillStatus> {
    let result = sqlx::query("UPDATE billstatus SET bill_status = ? WHERE bill_id = ? AND bill_status <> ?")
        .bind(BILL_CANCELLED)
        .bind(id)
        .bind(BILL_CANCELLED)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        let bill = super::require::<BillStatus>(pool, id).await?;
        return Err(cancelled(bill.bill_id));
    }
    super::require::<BillStatus>(pool, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn order(user_id: i64, bill_when: Option<i64>) -> BillStatusCreate {
        BillStatusCreate {
            bill_id: None,
            user_id,
            bill_phone: Some("555-0102".into()),
            bill_address: None,
            bill_when,
            bill_method: Some("cash".into()),
            bill_discount: 0.0,
            bill_delivery: 2.0,
            bill_total: 21.5,
            bill_paid: false,
        }
    }

    #[tokio::test]
    async fn newest_id_tracks_inserts() {
        let pool = test_pool().await;
        assert_eq!(newest_id(&pool).await.unwrap(), None);

        let first = create(&pool, order(1, None)).await.unwrap();
        let second = create(&pool, order(2, None)).await.unwrap();
        assert!(second.bill_id > first.bill_id);
        assert_eq!(newest_id(&pool).await.unwrap(), Some(second.bill_id));
    }

    #[tokio::test]
    async fn create_with_client_id() {
        let pool = test_pool().await;
        let bill = create(
            &pool,
            BillStatusCreate {
                bill_id: Some(100),
                ..order(1, Some(1_000))
            },
        )
        .await
        .unwrap();

        assert_eq!(bill.bill_id, 100);
        assert_eq!(bill.bill_when, 1_000);
        assert_eq!(bill.bill_status, BILL_PLACED);
        assert!(!bill.is_paid());

        let dup = BillStatusCreate {
            bill_id: Some(100),
            ..order(1, None)
        };
        assert!(matches!(
            create(&pool, dup).await.unwrap_err(),
            RepoError::Conflict(ErrorCode::AlreadyExists, _)
        ));
    }

    #[tokio::test]
    async fn window_selects_by_time() {
        let pool = test_pool().await;
        create(&pool, order(1, Some(50))).await.unwrap();
        create(&pool, order(1, Some(100))).await.unwrap();
        create(&pool, order(2, Some(199))).await.unwrap();
        create(&pool, order(2, Some(200))).await.unwrap();

        let bills = find_between(&pool, 100, 200).await.unwrap();
        let times: Vec<i64> = bills.iter().map(|b| b.bill_when).collect();
        assert_eq!(times, vec![100, 199]);

        assert_eq!(find_by_user(&pool, 2).await.unwrap().len(), 2);
        assert_eq!(find_all(&pool).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn stage_transitions() {
        let pool = test_pool().await;
        let bill = create(&pool, order(1, None)).await.unwrap();
        let id = bill.bill_id;

        assert_eq!(advance(&pool, id).await.unwrap().bill_status, 2);
        assert_eq!(advance(&pool, id).await.unwrap().bill_status, 3);

        let paid = mark_paid(&pool, id).await.unwrap();
        assert!(paid.is_paid());
        assert!(matches!(
            mark_paid(&pool, id).await.unwrap_err(),
            RepoError::Conflict(ErrorCode::BillAlreadyPaid, _)
        ));

        let cancelled_bill = cancel(&pool, id).await.unwrap();
        assert!(cancelled_bill.is_cancelled());
        for err in [
            advance(&pool, id).await.unwrap_err(),
            cancel(&pool, id).await.unwrap_err(),
        ] {
            assert!(matches!(err, RepoError::Conflict(ErrorCode::BillCancelled, _)));
        }
    }

    #[tokio::test]
    async fn cancelled_bill_cannot_be_paid() {
        let pool = test_pool().await;
        let bill = create(&pool, order(1, None)).await.unwrap();
        cancel(&pool, bill.bill_id).await.unwrap();

        assert!(matches!(
            mark_paid(&pool, bill.bill_id).await.unwrap_err(),
            RepoError::Conflict(ErrorCode::BillCancelled, _)
        ));
    }

    #[tokio::test]
    async fn transitions_on_missing_bill_are_not_found() {
        let pool = test_pool().await;
        for err in [
            advance(&pool, 9).await.unwrap_err(),
            mark_paid(&pool, 9).await.unwrap_err(),
            cancel(&pool, 9).await.unwrap_err(),
        ] {
            assert!(matches!(err, RepoError::NotFound(ErrorCode::BillNotFound, _)));
        }
    }
}
