//! User Repository

use super::{Entity, RepoError, RepoResult};
use crate::util::{hash_password, verify_password};
use shared::error::ErrorCode;
use shared::models::{User, UserCreate};
use sqlx::AnyPool;

impl Entity for User {
    const NAME: &'static str = "User";
    const TABLE: &'static str = "user";
    const KEY: &'static str = "user_id";
    const COLUMNS: &'static str =
        "user_id, user_name, user_email, user_phone, user_password, user_birth, user_gender";
    const NOT_FOUND: ErrorCode = ErrorCode::UserNotFound;
}

pub async fn find_by_email(pool: &AnyPool, email: &str) -> RepoResult<Option<User>> {
    let row = sqlx::query_as::<_, User>(
        "SELECT user_id, user_name, user_email, user_phone, user_password, user_birth, user_gender FROM user WHERE user_email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a user; the password is stored as an argon2 hash
pub async fn create(pool: &AnyPool, data: UserCreate) -> RepoResult<User> {
    let password_hash =
        hash_password(&data.user_password).map_err(|e| RepoError::Hash(e.to_string()))?;
    let email = data.user_email.clone();

    let result = sqlx::query(
        "INSERT INTO user (user_name, user_email, user_phone, user_password, user_birth, user_gender) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(data.user_name)
    .bind(data.user_email)
    .bind(data.user_phone)
    .bind(password_hash)
    .bind(data.user_birth)
    .bind(data.user_gender)
    .execute(pool)
    .await
    .map_err(|e| {
        RepoError::from(e).on_duplicate(
            ErrorCode::UserEmailExists,
            format!("User email '{email}' already exists"),
        )
    })?;

    let id = super::inserted_id(&result)?;
    super::require::<User>(pool, id).await
}

/// The user when `password` matches, `None` on an unknown email or a mismatch
pub async fn verify(pool: &AnyPool, email: &str, password: &str) -> RepoResult<Option<User>> {
    Ok(find_by_email(pool, email)
        .await?
        .filter(|user| verify_password(password, &user.user_password)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn ann() -> UserCreate {
        UserCreate {
            user_name: "Ann".into(),
            user_email: "ann@example.com".into(),
            user_phone: Some("555-0100".into()),
            user_password: "s3cret".into(),
            user_birth: None,
            user_gender: Some("F".into()),
        }
    }

    #[tokio::test]
    async fn create_stores_hash_not_plaintext() {
        let pool = test_pool().await;
        let user = create(&pool, ann()).await.unwrap();

        assert_ne!(user.user_password, "s3cret");
        assert!(user.user_password.starts_with("$argon2"));

        let fetched = find_by_email(&pool, "ann@example.com").await.unwrap().unwrap();
        assert_eq!(fetched.user_id, user.user_id);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        create(&pool, ann()).await.unwrap();

        let err = create(&pool, ann()).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(ErrorCode::UserEmailExists, _)));
    }

    #[tokio::test]
    async fn verify_checks_password() {
        let pool = test_pool().await;
        create(&pool, ann()).await.unwrap();

        assert!(verify(&pool, "ann@example.com", "s3cret").await.unwrap().is_some());
        assert!(verify(&pool, "ann@example.com", "wrong").await.unwrap().is_none());
        assert!(verify(&pool, "bob@example.com", "s3cret").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let pool = test_pool().await;
        assert!(find_by_email(&pool, "nobody@example.com").await.unwrap().is_none());
    }
}
