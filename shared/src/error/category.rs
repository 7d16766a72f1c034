//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Guest errors (1xxx)
    Guest,
    /// Import errors (3xxx)
    Import,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..3000 => Self::Guest,
            3000..4000 => Self::Import,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// System errors are logged; the rest are user-facing outcomes
    pub fn is_system(&self) -> bool {
        self.category() == ErrorCategory::System
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::DuplicateGuest.category(), ErrorCategory::Guest);
        assert_eq!(ErrorCode::NoValidGuests.category(), ErrorCategory::Import);
        assert!(ErrorCode::DatabaseError.is_system());
        assert!(ErrorCode::SerializationError.is_system());
        assert!(!ErrorCode::NoValidGuests.is_system());
    }
}
