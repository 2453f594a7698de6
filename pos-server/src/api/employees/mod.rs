//! Staff API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route("/api/employees/", get(handler::list).post(handler::create))
        .route("/api/employees/{sn}", get(handler::get_by_sn))
        .route("/api/employees/{sn}/verify", post(handler::verify))
}
