//! Unified error codes for the seating engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 70xx: Table errors
//! - 71xx: Guest errors
//! - 72xx: Canvas gesture errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,

    // ==================== 70xx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table has no free seat
    TableFull = 7002,
    /// Capacity must be a positive integer
    InvalidCapacity = 7003,

    // ==================== 71xx: Guest ====================
    /// Guest not found in the directory
    GuestNotFound = 7101,

    // ==================== 72xx: Gesture ====================
    /// A drag gesture is already in progress
    GestureInProgress = 7201,
    /// A guest is armed for manual placement
    GuestArmed = 7202,
    /// No guest is armed for manual placement
    NoGuestArmed = 7203,
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
            ErrorCode::NotFound => "Resource not found",

            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableFull => "Table has no free seat",
            ErrorCode::InvalidCapacity => "Table capacity must be positive",

            ErrorCode::GuestNotFound => "Guest not found",

            ErrorCode::GestureInProgress => "A drag gesture is already in progress",
            ErrorCode::GuestArmed => "A guest is armed for placement",
            ErrorCode::NoGuestArmed => "No guest is armed for placement",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
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
            3 => Ok(ErrorCode::NotFound),

            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableFull),
            7003 => Ok(ErrorCode::InvalidCapacity),

            7101 => Ok(ErrorCode::GuestNotFound),

            7201 => Ok(ErrorCode::GestureInProgress),
            7202 => Ok(ErrorCode::GuestArmed),
            7203 => Ok(ErrorCode::NoGuestArmed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
