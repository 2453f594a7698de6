//! Booking API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/booking", post(handler::create))
        .route("/api/booking/", post(handler::create))
        .route("/api/booking/{id}", get(handler::get_by_id))
        .route("/api/booking/user/{user_id}", get(handler::list_by_user))
}
