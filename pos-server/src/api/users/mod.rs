//! User API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(handler::create))
        .route("/api/users/", post(handler::create))
        .route("/api/users/{email}", get(handler::get_by_email))
        .route("/api/users/{email}/verify", post(handler::verify))
}
