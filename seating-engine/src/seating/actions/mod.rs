//! Command action implementations
//!
//! Each action implements the `ActionHandler` trait and handles
//! one specific command type.

use crate::seating::traits::{ActionContext, ActionHandler, ActionResult};
use shared::seating::{SeatingCommand, SeatingCommandPayload};

mod guests;
mod import_guests;
mod move_guests;
mod tables;

pub use guests::{
    AddGuestAction, AddPlusOneAction, ChangeGroupAction, DeleteGuestsAction, RenameGuestAction,
    next_companion_id, plus_one_allowed,
};
pub use import_guests::ImportGuestsAction;
pub use move_guests::{MoveToPoolAction, MoveToTableAction, RemoveFromTableAction};
pub use tables::{
    AddTableAction, ClearAllTablesAction, ClearTableAction, SetTableAliasAction,
    SetTableCapacityAction, SetTableNumberAction,
};

/// SeatingAction enum - dispatches to concrete action implementations
pub enum SeatingAction {
    MoveToTable(MoveToTableAction),
    MoveToPool(MoveToPoolAction),
    RemoveFromTable(RemoveFromTableAction),
    ClearTable(ClearTableAction),
    ClearAllTables(ClearAllTablesAction),
    AddTable(AddTableAction),
    SetTableAlias(SetTableAliasAction),
    SetTableNumber(SetTableNumberAction),
    SetTableCapacity(SetTableCapacityAction),
    AddGuest(AddGuestAction),
    AddPlusOne(AddPlusOneAction),
    RenameGuest(RenameGuestAction),
    ChangeGroup(ChangeGroupAction),
    DeleteGuests(DeleteGuestsAction),
    ImportGuests(ImportGuestsAction),
}

impl ActionHandler for SeatingAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        match self {
            SeatingAction::MoveToTable(action) => action.execute(ctx),
            SeatingAction::MoveToPool(action) => action.execute(ctx),
            SeatingAction::RemoveFromTable(action) => action.execute(ctx),
            SeatingAction::ClearTable(action) => action.execute(ctx),
            SeatingAction::ClearAllTables(action) => action.execute(ctx),
            SeatingAction::AddTable(action) => action.execute(ctx),
            SeatingAction::SetTableAlias(action) => action.execute(ctx),
            SeatingAction::SetTableNumber(action) => action.execute(ctx),
            SeatingAction::SetTableCapacity(action) => action.execute(ctx),
            SeatingAction::AddGuest(action) => action.execute(ctx),
            SeatingAction::AddPlusOne(action) => action.execute(ctx),
            SeatingAction::RenameGuest(action) => action.execute(ctx),
            SeatingAction::ChangeGroup(action) => action.execute(ctx),
            SeatingAction::DeleteGuests(action) => action.execute(ctx),
            SeatingAction::ImportGuests(action) => action.execute(ctx),
        }
    }
}

/// Convert SeatingCommand to SeatingAction
///
/// This is the only place with a match on SeatingCommandPayload.
impl From<&SeatingCommand> for SeatingAction {
    fn from(cmd: &SeatingCommand) -> Self {
        match &cmd.payload {
            SeatingCommandPayload::MoveToTable {
                payload,
                target_table_index,
            } => SeatingAction::MoveToTable(MoveToTableAction {
                payload: payload.clone(),
                target_table_index: *target_table_index,
            }),
            SeatingCommandPayload::MoveToPool { payload } => {
                SeatingAction::MoveToPool(MoveToPoolAction {
                    payload: payload.clone(),
                })
            }
            SeatingCommandPayload::RemoveFromTable {
                guest_id,
                table_index,
            } => SeatingAction::RemoveFromTable(RemoveFromTableAction {
                guest_id: guest_id.clone(),
                table_index: *table_index,
            }),
            SeatingCommandPayload::ClearTable { table_index } => {
                SeatingAction::ClearTable(ClearTableAction {
                    table_index: *table_index,
                })
            }
            SeatingCommandPayload::ClearAllTables => {
                SeatingAction::ClearAllTables(ClearAllTablesAction)
            }
            SeatingCommandPayload::AddTable => SeatingAction::AddTable(AddTableAction),
            SeatingCommandPayload::SetTableAlias { table_index, alias } => {
                SeatingAction::SetTableAlias(SetTableAliasAction {
                    table_index: *table_index,
                    alias: alias.clone(),
                })
            }
            SeatingCommandPayload::SetTableNumber { table_index, value } => {
                SeatingAction::SetTableNumber(SetTableNumberAction {
                    table_index: *table_index,
                    value: value.clone(),
                })
            }
            SeatingCommandPayload::SetTableCapacity { table_index, value } => {
                SeatingAction::SetTableCapacity(SetTableCapacityAction {
                    table_index: *table_index,
                    value: value.clone(),
                })
            }
            SeatingCommandPayload::AddGuest {
                first_name,
                last_name,
                group,
            } => SeatingAction::AddGuest(AddGuestAction {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                group: group.clone(),
            }),
            SeatingCommandPayload::AddPlusOne { guest_id } => {
                SeatingAction::AddPlusOne(AddPlusOneAction {
                    guest_id: guest_id.clone(),
                })
            }
            SeatingCommandPayload::RenameGuest {
                guest_id,
                first_name,
                last_name,
            } => SeatingAction::RenameGuest(RenameGuestAction {
                guest_id: guest_id.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            }),
            SeatingCommandPayload::ChangeGroup { guest_ids, group } => {
                SeatingAction::ChangeGroup(ChangeGroupAction {
                    guest_ids: guest_ids.clone(),
                    group: group.clone(),
                })
            }
            SeatingCommandPayload::DeleteGuests { guest_ids } => {
                SeatingAction::DeleteGuests(DeleteGuestsAction {
                    guest_ids: guest_ids.clone(),
                })
            }
            SeatingCommandPayload::ImportGuests { rows } => {
                SeatingAction::ImportGuests(ImportGuestsAction { rows: rows.clone() })
            }
        }
    }
}
