//! Seat Model

use serde::{Deserialize, Serialize};

/// Status value of a free seat
pub const SEAT_FREE: i64 = 0;

/// Seat with its occupancy counter
///
/// `seat_status` is 0 when free and counts occupancy stages from 1 upwards;
/// `user_id` is the assigned occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Seat {
    pub seat_id: i64,
    pub seat_status: i64,
    pub user_id: Option<i64>,
}

impl Seat {
    pub fn is_free(&self) -> bool {
        self.seat_status == SEAT_FREE
    }
}

/// Assign seat payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatAssign {
    pub user_id: i64,
}
