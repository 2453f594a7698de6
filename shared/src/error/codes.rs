//! Unified error codes for the POS backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Credential errors
//! - 4xxx: Bill, cart and booking errors
//! - 6xxx: Food errors
//! - 7xxx: Seat errors
//! - 8xxx: Staff and user account errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so that clients can switch on the number
/// without depending on variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Credentials ====================
    /// Invalid credentials (login key / password)
    InvalidCredentials = 1002,

    // ==================== 4xxx: Bill / Cart / Booking ====================
    /// Bill not found
    BillNotFound = 4001,
    /// Bill has already been paid
    BillAlreadyPaid = 4002,
    /// Bill has been cancelled
    BillCancelled = 4004,
    /// Bill line for this food already exists
    BillDetailExists = 4006,
    /// Cart line not found
    CartItemNotFound = 4101,
    /// Cart line already exists
    CartItemExists = 4102,
    /// Booking not found
    BookingNotFound = 4201,

    // ==================== 6xxx: Food ====================
    /// Food not found
    FoodNotFound = 6001,
    /// Food has invalid price
    FoodInvalidPrice = 6002,

    // ==================== 7xxx: Seat ====================
    /// Seat not found
    SeatNotFound = 7001,
    /// Seat is occupied
    SeatOccupied = 7002,

    // ==================== 8xxx: Accounts ====================
    /// Staff member not found
    StaffNotFound = 8001,
    /// Staff serial number already exists
    StaffSnExists = 8002,
    /// User not found
    UserNotFound = 8011,
    /// User email already exists
    UserEmailExists = 8012,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Credentials
            ErrorCode::InvalidCredentials => "Invalid login or password",

            // Bill / Cart / Booking
            ErrorCode::BillNotFound => "Bill not found",
            ErrorCode::BillAlreadyPaid => "Bill has already been paid",
            ErrorCode::BillCancelled => "Bill has been cancelled",
            ErrorCode::BillDetailExists => "Bill line already exists",
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::CartItemExists => "Cart item already exists",
            ErrorCode::BookingNotFound => "Booking not found",

            // Food
            ErrorCode::FoodNotFound => "Food not found",
            ErrorCode::FoodInvalidPrice => "Food has invalid price",

            // Seat
            ErrorCode::SeatNotFound => "Seat not found",
            ErrorCode::SeatOccupied => "Seat is occupied",

            // Accounts
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::StaffSnExists => "Staff serial number already exists",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "User email already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Credentials
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Bill / Cart / Booking
            4001 => Ok(ErrorCode::BillNotFound),
            4002 => Ok(ErrorCode::BillAlreadyPaid),
            4004 => Ok(ErrorCode::BillCancelled),
            4006 => Ok(ErrorCode::BillDetailExists),
            4101 => Ok(ErrorCode::CartItemNotFound),
            4102 => Ok(ErrorCode::CartItemExists),
            4201 => Ok(ErrorCode::BookingNotFound),

            // Food
            6001 => Ok(ErrorCode::FoodNotFound),
            6002 => Ok(ErrorCode::FoodInvalidPrice),

            // Seat
            7001 => Ok(ErrorCode::SeatNotFound),
            7002 => Ok(ErrorCode::SeatOccupied),

            // Accounts
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::StaffSnExists),
            8011 => Ok(ErrorCode::UserNotFound),
            8012 => Ok(ErrorCode::UserEmailExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
