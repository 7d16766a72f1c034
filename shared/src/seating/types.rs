//! Command outcomes

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Final status of a command
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    /// State changed and one undo snapshot was recorded
    Applied,
    /// Valid request that changes nothing; no snapshot recorded
    Skipped,
    /// Rejected; state untouched
    Failed,
}

/// Why a command was a no-op
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// Guest dropped onto the location it already occupies
    SameLocation,
    /// Table has no members to clear
    TableEmpty,
    TableOutOfRange,
    GuestNotFound,
    /// Non-numeric or non-positive number/capacity input
    InvalidValue,
    FirstNameRequired,
    /// Guest id is not numeric, so "+1" is not offered
    PlusOneNotAllowed,
    NothingSelected,
    /// New value equals the current one
    Unchanged,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::SameLocation => "guest is already there",
            SkipReason::TableEmpty => "table is empty",
            SkipReason::TableOutOfRange => "table does not exist",
            SkipReason::GuestNotFound => "guest not found",
            SkipReason::InvalidValue => "value must be a positive number",
            SkipReason::FirstNameRequired => "first name is required",
            SkipReason::PlusOneNotAllowed => "guest cannot bring a +1",
            SkipReason::NothingSelected => "no guests selected",
            SkipReason::Unchanged => "nothing changed",
        };
        f.write_str(text)
    }
}

/// Command error (only raised for rejected imports)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandError {
    pub code: ErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    pub status: CommandStatus,
    /// Undo label of the applied change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn applied(command_id: String, description: String) -> Self {
        Self {
            command_id,
            status: CommandStatus::Applied,
            description: Some(description),
            skip_reason: None,
            error: None,
        }
    }

    pub fn skipped(command_id: String, reason: SkipReason) -> Self {
        Self {
            command_id,
            status: CommandStatus::Skipped,
            description: None,
            skip_reason: Some(reason),
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            status: CommandStatus::Failed,
            description: None,
            skip_reason: None,
            error: Some(error),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.status == CommandStatus::Applied
    }

    pub fn is_skipped(&self) -> bool {
        self.status == CommandStatus::Skipped
    }

    pub fn is_failed(&self) -> bool {
        self.status == CommandStatus::Failed
    }
}

/// Result of an undo request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UndoOutcome {
    /// The arrangement was rolled back past `description`
    Restored { description: String },
    /// History was empty; informational only
    NothingToUndo,
}
