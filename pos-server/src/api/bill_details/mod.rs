//! Bill Detail API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/billdetails", post(handler::create))
        .route("/api/billdetails/{id}", get(handler::list_by_bill))
}
