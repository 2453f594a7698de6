//! Bridge from repository errors to the API error
//!
//! Rule violations pass through with their code. Infrastructure failures are
//! logged here and reach the client as a bare database error.

use shared::error::{AppError, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(code, message) | RepoError::Conflict(code, message) => {
                AppError::with_message(code, message)
            }
            RepoError::Unavailable(message) => {
                tracing::error!(error = %message, "Database unavailable");
                AppError::new(ErrorCode::TimeoutError)
            }
            RepoError::Database(message) => {
                tracing::error!(error = %message, "Database statement failed");
                AppError::new(ErrorCode::DatabaseError)
            }
            RepoError::Hash(message) => {
                tracing::error!(error = %message, "Password hashing failed");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}
