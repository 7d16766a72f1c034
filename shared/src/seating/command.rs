//! Seating commands - requests from the UI to change the arrangement

use super::drag::DragPayload;
use crate::models::GuestId;
use serde::{Deserialize, Serialize};

/// Seating command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingCommand {
    /// Command unique ID (echoed in the response)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: SeatingCommandPayload,
}

impl SeatingCommand {
    pub fn new(payload: SeatingCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// One raw ingestion row (first name, last name, group)
///
/// Any trailing columns, including a provided id, are not carried: ids are
/// always allocated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRow {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl GuestRow {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group: Option<&str>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            group: group.map(str::to_string),
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingCommandPayload {
    // ========== Moves ==========
    MoveToTable {
        payload: DragPayload,
        target_table_index: usize,
    },
    MoveToPool {
        payload: DragPayload,
    },
    RemoveFromTable {
        guest_id: GuestId,
        table_index: usize,
    },
    ClearTable {
        table_index: usize,
    },
    ClearAllTables,

    // ========== Tables ==========
    AddTable,
    SetTableAlias {
        table_index: usize,
        alias: String,
    },
    /// `value` is raw user input; non-numeric or non-positive is skipped
    SetTableNumber {
        table_index: usize,
        value: String,
    },
    /// `value` is raw user input; non-numeric or non-positive is skipped
    SetTableCapacity {
        table_index: usize,
        value: String,
    },

    // ========== Guests ==========
    AddGuest {
        first_name: String,
        last_name: String,
        #[serde(default)]
        group: Option<String>,
    },
    AddPlusOne {
        guest_id: GuestId,
    },
    RenameGuest {
        guest_id: GuestId,
        first_name: String,
        last_name: String,
    },
    ChangeGroup {
        guest_ids: Vec<GuestId>,
        group: String,
    },
    DeleteGuests {
        guest_ids: Vec<GuestId>,
    },
    ImportGuests {
        rows: Vec<GuestRow>,
    },
}

impl SeatingCommandPayload {
    /// Whether a successful run consumes the current selection
    pub fn consumes_selection(&self) -> bool {
        matches!(
            self,
            SeatingCommandPayload::MoveToTable { .. }
                | SeatingCommandPayload::MoveToPool { .. }
                | SeatingCommandPayload::ChangeGroup { .. }
                | SeatingCommandPayload::DeleteGuests { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_tagging() {
        let cmd = SeatingCommand::new(SeatingCommandPayload::SetTableCapacity {
            table_index: 2,
            value: "8".to_string(),
        });
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["payload"]["type"], "SET_TABLE_CAPACITY");
        assert_eq!(json["payload"]["table_index"], 2);
        assert!(!cmd.command_id.is_empty());
    }

    #[test]
    fn test_consumes_selection() {
        let delete = SeatingCommandPayload::DeleteGuests { guest_ids: vec![] };
        assert!(delete.consumes_selection());
        assert!(!SeatingCommandPayload::AddTable.consumes_selection());
    }
}
