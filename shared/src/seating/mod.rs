//! Seating Arrangement Module
//!
//! Types exchanged between the seating engine and its collaborators:
//! - Arrangement: live pool + tables + table metadata
//! - Commands: requests from the UI to change the arrangement
//! - Drag payloads: single or multi-guest transfers
//! - Documents: persisted and exported shapes

pub mod arrangement;
pub mod command;
pub mod document;
pub mod drag;
pub mod types;

// Re-exports
pub use arrangement::{Arrangement, GuestLocation, TableSummary};
pub use command::{GuestRow, SeatingCommand, SeatingCommandPayload};
pub use document::{
    EXPORT_VERSION, ExportMetadata, ExportedArrangement, ExportedTable, SavedArrangement,
    tables_needed,
};
pub use drag::{DragPayload, DraggedGuest, MULTI_DRAG_ID, MultiDrag};
pub use types::{CommandError, CommandResponse, CommandStatus, SkipReason, UndoOutcome};
