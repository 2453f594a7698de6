//! User Model

use serde::{Deserialize, Serialize};

/// Customer account
///
/// `user_password` holds an argon2 hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    #[serde(skip_serializing, default)]
    pub user_password: String,
    pub user_birth: Option<String>,
    pub user_gender: Option<String>,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    pub user_password: String,
    pub user_birth: Option<String>,
    pub user_gender: Option<String>,
}

/// Password submitted for verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCheck {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            user_id: 1,
            user_name: "Ann".into(),
            user_email: "ann@example.com".into(),
            user_phone: None,
            user_password: "$argon2id$v=19$secret".into(),
            user_birth: None,
            user_gender: Some("F".into()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("user_password").is_none());
        assert_eq!(json["user_email"], "ann@example.com");
    }
}
