//! Food API

mod handler;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/foods", get(handler::list).post(handler::create))
        .route("/api/foods/", get(handler::list).post(handler::create))
        .route(
            "/api/foods/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
