//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PasswordCheck, User, UserCreate};

use crate::db::repository::user;
use crate::state::AppState;

/// GET /api/users/{email}
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = user::find_by_email(&state.db.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::UserNotFound, format!("User '{email}' not found"))
        })?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    if payload.user_email.trim().is_empty() {
        return Err(AppError::validation("user_email must not be empty"));
    }
    if payload.user_password.is_empty() {
        return Err(AppError::validation("user_password must not be empty"));
    }
    let user = user::create(&state.db.pool, payload).await?;
    tracing::info!(user_id = user.user_id, "User registered");
    Ok(Json(user))
}

/// POST /api/users/{email}/verify
pub async fn verify(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<PasswordCheck>,
) -> AppResult<Json<User>> {
    match user::verify(&state.db.pool, &email, &payload.password).await? {
        Some(user) => Ok(Json(user)),
        None => {
            tracing::warn!(email = %email, "User credential check failed");
            Err(AppError::invalid_credentials())
        }
    }
}
