//! Seat API

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/seats", get(handler::list))
        .route("/api/seats/", get(handler::list))
        .route("/api/seats/occ", get(handler::list_occupied))
        .route(
            "/api/seats/{id}",
            get(handler::get_by_id).post(handler::assign),
        )
        .route("/api/seats/status/{id}", put(handler::increment_status))
        .route("/api/seats/restatus/{id}", put(handler::reset))
}
