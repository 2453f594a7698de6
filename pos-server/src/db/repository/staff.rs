//! Staff Repository

use super::{Entity, RepoError, RepoResult};
use crate::util::{hash_password, verify_password};
use shared::error::ErrorCode;
use shared::models::{Staff, StaffCreate};
use sqlx::AnyPool;

impl Entity for Staff {
    const NAME: &'static str = "Staff";
    const TABLE: &'static str = "staff";
    const KEY: &'static str = "staff_id";
    const COLUMNS: &'static str = "staff_id, staff_sn, staff_name, staff_password";
    const NOT_FOUND: ErrorCode = ErrorCode::StaffNotFound;
}

pub async fn find_all(pool: &AnyPool) -> RepoResult<Vec<Staff>> {
    super::find_all::<Staff>(pool).await
}

pub async fn find_by_sn(pool: &AnyPool, sn: &str) -> RepoResult<Option<Staff>> {
    let row = sqlx::query_as::<_, Staff>(
        "SELECT staff_id, staff_sn, staff_name, staff_password FROM staff WHERE staff_sn = ?",
    )
    .bind(sn)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &AnyPool, data: StaffCreate) -> RepoResult<Staff> {
    let password_hash =
        hash_password(&data.staff_password).map_err(|e| RepoError::Hash(e.to_string()))?;
    let sn = data.staff_sn.clone();

    let result = sqlx::query(
        "INSERT INTO staff (staff_sn, staff_name, staff_password) VALUES (?, ?, ?)",
    )
    .bind(data.staff_sn)
    .bind(data.staff_name)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(|e| {
        RepoError::from(e)
            .on_duplicate(ErrorCode::StaffSnExists, format!("Staff '{sn}' already exists"))
    })?;

    let id = super::inserted_id(&result)?;
    super::require::<Staff>(pool, id).await
}

pub async fn verify(pool: &AnyPool, sn: &str, password: &str) -> RepoResult<Option<Staff>> {
    Ok(find_by_sn(pool, sn)
        .await?
        .filter(|staff| verify_password(password, &staff.staff_password)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn cashier(sn: &str) -> StaffCreate {
        StaffCreate {
            staff_sn: sn.into(),
            staff_name: "Cashier".into(),
            staff_password: "1234".into(),
        }
    }

    #[tokio::test]
    async fn create_and_lookup_by_sn() {
        let pool = test_pool().await;
        let staff = create(&pool, cashier("S001")).await.unwrap();
        create(&pool, cashier("S002")).await.unwrap();

        let fetched = find_by_sn(&pool, "S001").await.unwrap().unwrap();
        assert_eq!(fetched.staff_id, staff.staff_id);
        assert!(find_by_sn(&pool, "S404").await.unwrap().is_none());

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_sn_is_rejected() {
        let pool = test_pool().await;
        create(&pool, cashier("S001")).await.unwrap();
        let err = create(&pool, cashier("S001")).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(ErrorCode::StaffSnExists, _)));
    }

    #[tokio::test]
    async fn verify_checks_password() {
        let pool = test_pool().await;
        create(&pool, cashier("S001")).await.unwrap();
        assert!(verify(&pool, "S001", "1234").await.unwrap().is_some());
        assert!(verify(&pool, "S001", "0000").await.unwrap().is_none());
    }
}
