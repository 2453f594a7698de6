//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff account, looked up by serial number
///
/// `staff_password` holds an argon2 hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub staff_id: i64,
    pub staff_sn: String,
    pub staff_name: String,
    #[serde(skip_serializing, default)]
    pub staff_password: String,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub staff_sn: String,
    pub staff_name: String,
    pub staff_password: String,
}
