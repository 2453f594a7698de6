//! Booking Model

use serde::{Deserialize, Serialize};

/// Table booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub book_id: i64,
    pub book_name: String,
    pub book_phone: String,
    pub book_people: i64,
    pub book_tables: i64,
    pub user_id: Option<i64>,
    /// Requested date/time as entered by the client
    pub book_when: String,
    pub book_note: Option<String>,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub book_name: String,
    pub book_phone: String,
    pub book_people: i64,
    #[serde(default = "default_tables")]
    pub book_tables: i64,
    pub user_id: Option<i64>,
    pub book_when: String,
    pub book_note: Option<String>,
}

fn default_tables() -> i64 {
    1
}
