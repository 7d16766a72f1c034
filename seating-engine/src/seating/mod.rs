//! Seating arrangement engine
//!
//! # Architecture
//!
//! ```text
//! SeatingCommand ──▶ SeatingManager ──▶ SeatingAction ──▶ Arrangement
//!                        │                                    │
//!                        ├── UndoLog (bounded snapshots) ◀────┘
//!                        ├── Selection (multi-drag)
//!                        └── ArrangementRepository (redb)
//! ```
//!
//! # Module Structure
//!
//! - `actions` - one action per command type
//! - `ingest` - guest list decoding, parsing and companion linking
//! - `identity` - collision-free guest ids
//! - `ordering` - display order and grouping
//! - `undo` - bounded snapshot history
//! - `selection` - selection set and drag payloads
//! - `export` - JSON export document
//! - `storage` - redb persistence
//! - `manager` - command execution

pub mod actions;
pub mod export;
pub mod identity;
pub mod ingest;
pub mod manager;
pub mod ordering;
pub mod selection;
pub mod storage;
pub mod traits;
pub mod undo;

// Re-exports
pub use export::{ExportOptions, build_export};
pub use manager::{ManagerError, ManagerResult, SeatingManager};
pub use selection::Selection;
pub use storage::{ArrangementRepository, ArrangementStorage, StorageError, StorageResult};
pub use traits::{ActionContext, ActionError, ActionHandler};
pub use undo::{MAX_UNDO_HISTORY, UndoLog, UndoSnapshot};
