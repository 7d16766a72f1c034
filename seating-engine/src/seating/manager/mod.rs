//! SeatingManager - owns the live arrangement for one wedding
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Convert to SeatingAction
//!     ├─ 2. Copy the current arrangement
//!     ├─ 3. Execute the action against the live arrangement
//!     ├─ 4. Verify every guest is in exactly one place
//!     ├─ 5. Record the copy as an undo snapshot
//!     ├─ 6. Mark unsaved, clear selection when the command consumes it
//!     └─ 7. Return CommandResponse
//! ```
//!
//! Skipped and failed commands leave the arrangement, the undo history and
//! the unsaved flag exactly as they were.

mod error;

#[cfg(test)]
mod tests;

pub use error::{ManagerError, ManagerResult};

use crate::core::SeatingConfig;
use crate::seating::actions::{SeatingAction, plus_one_allowed};
use crate::seating::export::{ExportOptions, build_export};
use crate::seating::ingest::{decode_best, parse_guest_rows};
use crate::seating::selection::Selection;
use crate::seating::storage::ArrangementRepository;
use crate::seating::traits::{ActionContext, ActionError, ActionHandler};
use crate::seating::undo::{UndoLog, UndoSnapshot};
use shared::models::{Guest, GuestId};
use shared::seating::{
    Arrangement, CommandResponse, DragPayload, ExportedArrangement, GuestLocation,
    SavedArrangement, SeatingCommand, SeatingCommandPayload, TableSummary, UndoOutcome,
};

pub struct SeatingManager {
    wedding_id: String,
    arrangement: Arrangement,
    undo_log: UndoLog,
    selection: Selection,
    config: SeatingConfig,
    unsaved_changes: bool,
}

impl std::fmt::Debug for SeatingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingManager")
            .field("wedding_id", &self.wedding_id)
            .field("pool", &self.arrangement.pool.len())
            .field("tables", &self.arrangement.table_count())
            .field("undo_depth", &self.undo_log.len())
            .field("unsaved_changes", &self.unsaved_changes)
            .finish()
    }
}

impl SeatingManager {
    /// Manager for a wedding with an empty arrangement
    pub fn new(wedding_id: impl Into<String>, config: SeatingConfig) -> Self {
        Self::with_arrangement(wedding_id, Arrangement::new(), config)
    }

    pub fn with_arrangement(
        wedding_id: impl Into<String>,
        arrangement: Arrangement,
        config: SeatingConfig,
    ) -> Self {
        Self {
            wedding_id: wedding_id.into(),
            arrangement,
            undo_log: UndoLog::new(),
            selection: Selection::new(),
            config,
            unsaved_changes: false,
        }
    }

    /// Load the saved arrangement for `wedding_id`
    ///
    /// A wedding with nothing saved starts empty. Stored documents are
    /// normalized on the way in (see [`SavedArrangement::into_arrangement`]).
    pub fn load_from(
        repo: &dyn ArrangementRepository,
        wedding_id: impl Into<String>,
        config: SeatingConfig,
    ) -> ManagerResult<Self> {
        let wedding_id = wedding_id.into();
        let arrangement = match repo.load(&wedding_id)? {
            Some(saved) => saved.into_arrangement(config.default_table_size),
            None => {
                tracing::info!(wedding_id = %wedding_id, "No saved arrangement, starting empty");
                Arrangement::new()
            }
        };
        if let Err(id) = arrangement.check_ownership() {
            return Err(ManagerError::DuplicateGuest(id));
        }
        tracing::info!(
            wedding_id = %wedding_id,
            guests = arrangement.total_guests(),
            tables = arrangement.table_count(),
            "Arrangement loaded"
        );
        Ok(Self::with_arrangement(wedding_id, arrangement, config))
    }

    /// Persist the arrangement and clear the unsaved flag
    pub fn save_to(&mut self, repo: &dyn ArrangementRepository) -> ManagerResult<()> {
        repo.save(&self.wedding_id, &self.saved_document())?;
        self.unsaved_changes = false;
        tracing::info!(wedding_id = %self.wedding_id, "Arrangement saved");
        Ok(())
    }

    // ========== Accessors ==========

    pub fn wedding_id(&self) -> &str {
        &self.wedding_id
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Clear the unsaved flag after an external save
    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    pub fn can_undo(&self) -> bool {
        self.undo_log.can_undo()
    }

    pub fn saved_document(&self) -> SavedArrangement {
        SavedArrangement::from(&self.arrangement)
    }

    pub fn table_summaries(&self) -> Vec<TableSummary> {
        self.arrangement
            .table_summaries(self.config.default_table_size)
    }

    /// Whether the "+1" control is offered for a guest
    pub fn can_add_plus_one(&self, guest_id: &GuestId) -> bool {
        self.arrangement
            .find_guest(guest_id)
            .is_some_and(plus_one_allowed)
    }

    // ========== Commands ==========

    /// Execute a command
    pub fn execute_command(&mut self, cmd: SeatingCommand) -> CommandResponse {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        let action = SeatingAction::from(&cmd);
        let before = self.arrangement.clone();
        let result = {
            let mut ctx = ActionContext::new(&mut self.arrangement, self.config.default_table_size);
            action.execute(&mut ctx)
        };

        match result {
            Ok(description) => {
                if let Err(id) = self.arrangement.check_ownership() {
                    self.arrangement = before;
                    let err = ManagerError::DuplicateGuest(id);
                    return CommandResponse::error(cmd.command_id, err.into());
                }
                self.undo_log
                    .push(UndoSnapshot::capture(before, description.clone()));
                self.unsaved_changes = true;
                if cmd.payload.consumes_selection() {
                    self.selection.clear();
                }
                tracing::info!(
                    command_id = %cmd.command_id,
                    description = %description,
                    undo_depth = self.undo_log.len(),
                    "Command applied"
                );
                CommandResponse::applied(cmd.command_id, description)
            }
            Err(ActionError::Skip(reason)) => {
                self.arrangement = before;
                tracing::debug!(command_id = %cmd.command_id, reason = %reason, "Command skipped");
                CommandResponse::skipped(cmd.command_id, reason)
            }
            Err(ActionError::Ingest(err)) => {
                self.arrangement = before;
                tracing::warn!(command_id = %cmd.command_id, error = %err, "Command failed");
                CommandResponse::error(cmd.command_id, ManagerError::from(err).into())
            }
        }
    }

    /// Wrap a payload in a fresh command and execute it
    pub fn execute(&mut self, payload: SeatingCommandPayload) -> CommandResponse {
        self.execute_command(SeatingCommand::new(payload))
    }

    /// Roll back the most recent applied change
    ///
    /// Undo itself is not recorded. Selection is kept; ids it holds that no
    /// longer exist are ignored.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.undo_log.pop() {
            Some(snapshot) => {
                self.arrangement = snapshot.arrangement;
                self.unsaved_changes = true;
                self.selection.retain_known(&self.arrangement.guest_ids());
                tracing::info!(
                    description = %snapshot.description,
                    remaining = self.undo_log.len(),
                    "Undo applied"
                );
                UndoOutcome::Restored {
                    description: snapshot.description,
                }
            }
            None => {
                tracing::debug!("Nothing to undo");
                UndoOutcome::NothingToUndo
            }
        }
    }

    /// Decode, parse and import an uploaded guest list file
    pub fn import_bytes(&mut self, bytes: &[u8]) -> CommandResponse {
        let decoded = decode_best(bytes);
        let parsed = parse_guest_rows(&decoded.text);
        tracing::info!(
            encoding = decoded.encoding.name(),
            rows = parsed.rows.len(),
            dropped = parsed.dropped,
            header_skipped = parsed.header_skipped,
            "Guest list file read"
        );
        self.execute(SeatingCommandPayload::ImportGuests { rows: parsed.rows })
    }

    // ========== Selection ==========

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn toggle_selection(&mut self, guest_id: &GuestId) -> bool {
        self.selection.toggle(guest_id)
    }

    /// Drag payload for a drag starting on `guest_id`
    pub fn drag_payload(&self, guest_id: &GuestId) -> Option<DragPayload> {
        let location = self.arrangement.locate(guest_id)?;
        let guest = self.arrangement.find_guest(guest_id)?;
        let from = match location {
            GuestLocation::Pool => None,
            GuestLocation::Table(index) => Some(index),
        };
        Some(
            self.selection
                .build_drag_payload(guest, from, &self.arrangement),
        )
    }

    /// Group the selected guests under `group`
    pub fn change_group_of_selection(&mut self, group: impl Into<String>) -> CommandResponse {
        let guest_ids = self.selection.to_vec();
        self.execute(SeatingCommandPayload::ChangeGroup {
            guest_ids,
            group: group.into(),
        })
    }

    /// Delete the selected guests that sit in the pool
    pub fn delete_selection(&mut self) -> CommandResponse {
        let guest_ids = self.selection.to_vec();
        self.execute(SeatingCommandPayload::DeleteGuests { guest_ids })
    }

    // ========== Views ==========

    pub fn find_guest(&self, guest_id: &GuestId) -> Option<&Guest> {
        self.arrangement.find_guest(guest_id)
    }

    pub fn export(&self, wedding_name: &str, options: &ExportOptions) -> ExportedArrangement {
        build_export(
            wedding_name,
            &self.arrangement,
            self.config.default_table_size,
            options,
        )
    }
}
