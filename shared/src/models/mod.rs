//! Data models
//!
//! Shared between the server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` and timestamps are Unix millis.

pub mod bill;
pub mod booking;
pub mod cart;
pub mod food;
pub mod seat;
pub mod staff;
pub mod user;

// Re-exports
pub use bill::*;
pub use booking::*;
pub use cart::*;
pub use food::*;
pub use seat::*;
pub use staff::*;
pub use user::*;
