//! Unified error codes for the seating engine
//!
//! Only failures get a code; skipped commands carry a `SkipReason` instead.
//! Codes are organized by category:
//! - 1xxx: Guest errors
//! - 3xxx: Import errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Guest ====================
    /// Guest id appears in more than one place
    DuplicateGuest = 1002,

    // ==================== 3xxx: Import ====================
    /// Import produced no usable guests
    NoValidGuests = 3001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Serialization error
    SerializationError = 9006,
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
            ErrorCode::DuplicateGuest => "Guest is seated in more than one place",
            ErrorCode::NoValidGuests => "No valid guests found",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::SerializationError => "Serialization error",
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
            1002 => Ok(ErrorCode::DuplicateGuest),
            3001 => Ok(ErrorCode::NoValidGuests),
            9002 => Ok(ErrorCode::DatabaseError),
            9006 => Ok(ErrorCode::SerializationError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::DuplicateGuest,
            ErrorCode::NoValidGuests,
            ErrorCode::DatabaseError,
            ErrorCode::SerializationError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::NoValidGuests).unwrap();
        assert_eq!(json, "3001");
        let code: ErrorCode = serde_json::from_str("9002").unwrap();
        assert_eq!(code, ErrorCode::DatabaseError);
        assert!(serde_json::from_str::<ErrorCode>("2001").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NoValidGuests.to_string(), "E3001");
        assert_eq!(ErrorCode::DuplicateGuest.to_string(), "E1002");
    }
}
