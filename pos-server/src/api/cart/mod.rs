//! Cart API
//!
//! Lines are addressed by (`user_id`, `food_id`); a single id addresses the
//! whole cart of that user.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cartItem", post(handler::add).put(handler::update))
        .route("/api/cartItem/", post(handler::add).put(handler::update))
        .route(
            "/api/cartItem/{user_id}",
            get(handler::list_by_user).delete(handler::clear),
        )
        .route(
            "/api/cartItem/{user_id}/{food_id}",
            get(handler::get_line).delete(handler::delete_line),
        )
}
