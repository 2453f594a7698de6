//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PasswordCheck, Staff, StaffCreate};

use crate::db::repository::staff;
use crate::state::AppState;

/// GET /api/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Staff>>> {
    let employees = staff::find_all(&state.db.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{sn}
pub async fn get_by_sn(
    State(state): State<AppState>,
    Path(sn): Path<String>,
) -> AppResult<Json<Staff>> {
    let employee = staff::find_by_sn(&state.db.pool, &sn).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::StaffNotFound, format!("Staff '{sn}' not found"))
    })?;
    Ok(Json(employee))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<Staff>> {
    if payload.staff_sn.trim().is_empty() {
        return Err(AppError::validation("staff_sn must not be empty"));
    }
    if payload.staff_password.is_empty() {
        return Err(AppError::validation("staff_password must not be empty"));
    }
    let employee = staff::create(&state.db.pool, payload).await?;
    tracing::info!(staff_id = employee.staff_id, sn = %employee.staff_sn, "Staff created");
    Ok(Json(employee))
}

/// POST /api/employees/{sn}/verify
pub async fn verify(
    State(state): State<AppState>,
    Path(sn): Path<String>,
    Json(payload): Json<PasswordCheck>,
) -> AppResult<Json<Staff>> {
    match staff::verify(&state.db.pool, &sn, &payload.password).await? {
        Some(employee) => Ok(Json(employee)),
        None => {
            tracing::warn!(sn = %sn, "Staff credential check failed");
            Err(AppError::invalid_credentials())
        }
    }
}
