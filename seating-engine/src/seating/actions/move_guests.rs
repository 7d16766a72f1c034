//! Guest moves between the pool and tables
//!
//! Each dragged guest carries the location it was dragged from. That tag is
//! trusted when the guest is actually there; otherwise the guest is found
//! wherever it sits now. Guests found nowhere are skipped, never recreated.

use crate::seating::traits::{
    ActionContext, ActionError, ActionHandler, ActionResult, describe_guests,
};
use shared::models::{Guest, GuestId};
use shared::seating::{Arrangement, DragPayload, GuestLocation, SkipReason};

/// Resolve where each dragged guest currently sits
///
/// Duplicate ids in the payload are collapsed.
fn resolve_sources(
    arrangement: &Arrangement,
    payload: &DragPayload,
) -> Vec<(GuestId, GuestLocation)> {
    let mut resolved: Vec<(GuestId, GuestLocation)> = Vec::new();
    for dragged in payload.guests() {
        let id = &dragged.guest.id;
        if resolved.iter().any(|(seen, _)| seen == id) {
            continue;
        }
        let tagged = match dragged.from_table_index {
            Some(index) => GuestLocation::Table(index),
            None => GuestLocation::Pool,
        };
        let here = match tagged {
            GuestLocation::Pool => arrangement.pool.iter().any(|g| &g.id == id),
            GuestLocation::Table(index) => arrangement
                .tables
                .get(index)
                .is_some_and(|members| members.iter().any(|g| &g.id == id)),
        };
        if here {
            resolved.push((id.clone(), tagged));
            continue;
        }
        match arrangement.locate(id) {
            Some(actual) => {
                tracing::warn!(
                    guest_id = %id,
                    tagged = ?tagged,
                    actual = ?actual,
                    "Dragged guest was not at its tagged location"
                );
                resolved.push((id.clone(), actual));
            }
            None => {
                tracing::warn!(guest_id = %id, "Dragged guest no longer exists, skipping");
            }
        }
    }
    resolved
}

fn take_all(arrangement: &mut Arrangement, sources: &[(GuestId, GuestLocation)]) -> Vec<Guest> {
    sources
        .iter()
        .filter_map(|(id, location)| arrangement.take_from(*location, id))
        .collect()
}

/// Drop guests onto a table, appending them to its member list
#[derive(Debug, Clone)]
pub struct MoveToTableAction {
    pub payload: DragPayload,
    pub target_table_index: usize,
}

impl ActionHandler for MoveToTableAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let target = self.target_table_index;
        ctx.require_table(target)?;
        if self.payload.is_empty() {
            return Err(ActionError::Skip(SkipReason::NothingSelected));
        }
        let sources = resolve_sources(ctx.arrangement, &self.payload);
        if sources.is_empty() {
            return Err(ActionError::Skip(SkipReason::GuestNotFound));
        }
        // Guests already at the target keep their seat
        let moving: Vec<_> = sources
            .into_iter()
            .filter(|(_, location)| *location != GuestLocation::Table(target))
            .collect();
        if moving.is_empty() {
            return Err(ActionError::Skip(SkipReason::SameLocation));
        }

        let moved = take_all(ctx.arrangement, &moving);
        let names: Vec<String> = moved.iter().map(Guest::full_name).collect();
        ctx.arrangement.tables[target].extend(moved);

        Ok(format!(
            "Move {} to {}",
            describe_guests(&names),
            ctx.arrangement.label(target)
        ))
    }
}

/// Return guests to the unassigned pool
#[derive(Debug, Clone)]
pub struct MoveToPoolAction {
    pub payload: DragPayload,
}

impl ActionHandler for MoveToPoolAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        if self.payload.is_empty() {
            return Err(ActionError::Skip(SkipReason::NothingSelected));
        }
        let sources = resolve_sources(ctx.arrangement, &self.payload);
        if sources.is_empty() {
            return Err(ActionError::Skip(SkipReason::GuestNotFound));
        }
        let seated: Vec<_> = sources
            .into_iter()
            .filter(|(_, location)| *location != GuestLocation::Pool)
            .collect();
        if seated.is_empty() {
            return Err(ActionError::Skip(SkipReason::SameLocation));
        }

        let moved = take_all(ctx.arrangement, &seated);
        let names: Vec<String> = moved.iter().map(Guest::full_name).collect();
        ctx.arrangement.pool.extend(moved);

        Ok(format!("Unassign {}", describe_guests(&names)))
    }
}

/// Send one seated guest back to the pool
#[derive(Debug, Clone)]
pub struct RemoveFromTableAction {
    pub guest_id: GuestId,
    pub table_index: usize,
}

impl ActionHandler for RemoveFromTableAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.require_table(self.table_index)?;
        let guest = ctx
            .arrangement
            .take_from(GuestLocation::Table(self.table_index), &self.guest_id)
            .ok_or(ActionError::Skip(SkipReason::GuestNotFound))?;
        let description = format!(
            "Remove {} from {}",
            guest.full_name(),
            ctx.arrangement.label(self.table_index)
        );
        ctx.arrangement.pool.push(guest);
        Ok(description)
    }
}
