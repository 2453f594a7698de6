//! Cart Model

use serde::{Deserialize, Serialize};

/// One cart line, keyed by (`user_id`, `food_id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CartItem {
    pub user_id: i64,
    pub food_id: i64,
    pub item_qty: i64,
}

/// Result of emptying a user's cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub user_id: i64,
    pub deleted: u64,
}
