//! Data models
//!
//! Shared between the seating engine and the browser (via JSON).
//! Wire names are camelCase to match the stored documents.

pub mod guest;

// Re-exports
pub use guest::*;
