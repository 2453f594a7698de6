//! Restaurant POS backend
//!
//! HTTP CRUD over food, users, staff, cart, bookings, bills and seats, backed
//! by a relational database through `sqlx`.

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod state;
pub mod util;

mod error;

pub use config::Config;
pub use db::DbService;
pub use state::AppState;
