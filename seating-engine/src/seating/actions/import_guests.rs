//! ImportGuests action
//!
//! Resolves raw rows into guests and appends them to the pool. A batch that
//! yields no guest at all fails without changing anything.

use crate::seating::ingest::{IngestError, resolve_rows};
use crate::seating::traits::{ActionContext, ActionHandler, ActionResult};
use shared::seating::GuestRow;

#[derive(Debug, Clone)]
pub struct ImportGuestsAction {
    pub rows: Vec<GuestRow>,
}

impl ActionHandler for ImportGuestsAction {
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let mut existing = ctx.arrangement.guest_ids();
        let report = resolve_rows(&self.rows, &existing)?;

        let mut added = Vec::with_capacity(report.guests.len());
        for guest in report.guests {
            if existing.insert(guest.id.clone()) {
                added.push(guest);
            } else {
                tracing::warn!(guest_id = %guest.id, "Skipping imported guest with duplicate id");
            }
        }
        if added.is_empty() {
            return Err(IngestError::NoValidGuests {
                rows: self.rows.len(),
            }
            .into());
        }

        let count = added.len();
        ctx.arrangement.pool.extend(added);
        let tables_added = ctx.grow_tables();
        tracing::info!(
            imported = count,
            companions = report.companions,
            orphans = report.orphans,
            dropped = report.dropped,
            tables_added,
            "Imported guests"
        );
        Ok(format!("Import {} guests", count))
    }
}
