//! API routes
//!
//! - [`health`] - health checks
//! - [`foods`] - menu items
//! - [`users`] - customer accounts
//! - [`employees`] - staff accounts
//! - [`cart`] - shopping cart lines
//! - [`booking`] - table bookings
//! - [`bill_details`] - bill food lines
//! - [`bill_status`] - bill headers and their stages
//! - [`seats`] - seat occupancy

pub mod bill_details;
pub mod bill_status;
pub mod booking;
pub mod cart;
pub mod employees;
pub mod foods;
pub mod health;
pub mod seats;
pub mod users;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router (without state)
pub fn build_app() -> Router<AppState> {
    Router::<AppState>::new()
        .merge(health::router())
        .merge(foods::router())
        .merge(users::router())
        .merge(employees::router())
        .merge(cart::router())
        .merge(booking::router())
        .merge(bill_details::router())
        .merge(bill_status::router())
        .merge(seats::router())
}

/// Router with state and middleware applied, ready to serve
pub fn create_router(state: AppState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
