//! Shared types for the seating planner
//!
//! Plain data exchanged between the seating engine, the browser UI and the
//! persistence layer: guests, arrangements, commands, documents and errors.

pub mod error;
pub mod models;
pub mod seating;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Guest, GuestId, GuestLink};
pub use seating::{Arrangement, CommandResponse, SeatingCommand, SeatingCommandPayload};
