//! Bill Models
//!
//! A bill is split in two tables: `billdetails` holds the food lines and
//! `billstatus` holds the header with its payment flag and stage counter.

use serde::{Deserialize, Serialize};

/// Stage value of a cancelled bill
pub const BILL_CANCELLED: i64 = 0;
/// Stage value of a freshly placed bill
pub const BILL_PLACED: i64 = 1;

/// One food line of a bill, keyed by (`bill_id`, `food_id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BillDetail {
    pub bill_id: i64,
    pub food_id: i64,
    pub item_qty: i64,
}

/// Bill header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BillStatus {
    pub bill_id: i64,
    pub user_id: i64,
    pub bill_phone: Option<String>,
    pub bill_address: Option<String>,
    /// Order time (Unix millis)
    pub bill_when: i64,
    pub bill_method: Option<String>,
    pub bill_discount: f64,
    pub bill_delivery: f64,
    pub bill_total: f64,
    /// 1 once paid
    pub bill_paid: i64,
    /// Stage counter, see [`BILL_CANCELLED`] / [`BILL_PLACED`]
    pub bill_status: i64,
}

impl BillStatus {
    pub fn is_cancelled(&self) -> bool {
        self.bill_status == BILL_CANCELLED
    }

    pub fn is_paid(&self) -> bool {
        self.bill_paid != 0
    }
}

/// Create bill header payload
///
/// `bill_id` may be pre-allocated by the client (from the newest-id lookup);
/// when absent the database assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillStatusCreate {
    pub bill_id: Option<i64>,
    pub user_id: i64,
    pub bill_phone: Option<String>,
    pub bill_address: Option<String>,
    pub bill_when: Option<i64>,
    pub bill_method: Option<String>,
    #[serde(default)]
    pub bill_discount: f64,
    #[serde(default)]
    pub bill_delivery: f64,
    pub bill_total: f64,
    #[serde(default)]
    pub bill_paid: bool,
}

/// Highest bill id currently stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewestBill {
    pub bill_id: Option<i64>,
}
