//! Action handler seam
//!
//! Every command is converted into an action that runs against an
//! [`ActionContext`]. An action either applies its change and returns the
//! undo label, or returns an [`ActionError`] before touching anything.

use crate::seating::ingest::IngestError;
use shared::models::GuestId;
use shared::seating::{Arrangement, SkipReason};
use thiserror::Error;

/// Mutable view of the live arrangement handed to actions
pub struct ActionContext<'a> {
    pub arrangement: &'a mut Arrangement,
    /// Capacity of tables with no explicit size
    pub default_table_size: u32,
}

impl<'a> ActionContext<'a> {
    pub fn new(arrangement: &'a mut Arrangement, default_table_size: u32) -> Self {
        Self {
            arrangement,
            default_table_size: default_table_size.max(1),
        }
    }

    /// Check that `index` names an existing table
    pub fn require_table(&self, index: usize) -> Result<(), ActionError> {
        if index < self.arrangement.table_count() {
            Ok(())
        } else {
            Err(ActionError::Skip(SkipReason::TableOutOfRange))
        }
    }

    /// Append empty tables until every guest has a seat
    ///
    /// Returns how many tables were added.
    pub fn grow_tables(&mut self) -> usize {
        let mut added = 0;
        let guests = self.arrangement.total_guests() as u64;
        while self.arrangement.total_capacity(self.default_table_size) < guests {
            self.arrangement.tables.push(Vec::new());
            added += 1;
        }
        if added > 0 {
            tracing::debug!(added, "Added tables to fit guest count");
        }
        added
    }

    pub fn guest_name(&self, id: &GuestId) -> Option<String> {
        self.arrangement.find_guest(id).map(|g| g.full_name())
    }
}

/// Why an action did not apply
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Skipped: {0}")]
    Skip(SkipReason),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl From<SkipReason> for ActionError {
    fn from(reason: SkipReason) -> Self {
        ActionError::Skip(reason)
    }
}

pub type ActionResult = Result<String, ActionError>;

/// One executable seating action
pub trait ActionHandler {
    /// Apply the action, returning its undo label
    ///
    /// Must return `Err` only before mutating `ctx.arrangement`.
    fn execute(&self, ctx: &mut ActionContext<'_>) -> ActionResult;
}

/// "Jane Smith" for one name, "3 guests" otherwise
pub fn describe_guests(names: &[String]) -> String {
    match names {
        [single] => single.clone(),
        _ => format!("{} guests", names.len()),
    }
}
