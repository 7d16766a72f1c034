//! Guest identity allocation
//!
//! Ids are random v4 UUIDs. The allocator never mutates the set it checks
//! against: the caller records each reserved id before asking for the next
//! one. [`IdBatch`] does that bookkeeping for multi-guest operations.

use shared::models::GuestId;
use std::collections::HashSet;
use uuid::Uuid;

/// Produce an id not present in `existing`
pub fn reserve_id(existing: &HashSet<GuestId>) -> GuestId {
    loop {
        let candidate = GuestId::new(Uuid::new_v4().to_string());
        if !existing.contains(&candidate) {
            return candidate;
        }
    }
}

/// Id allocation scoped to one batch (an import, a manual add)
#[derive(Debug, Default)]
pub struct IdBatch {
    taken: HashSet<GuestId>,
}

impl IdBatch {
    /// Start a batch that must avoid every id in `existing`
    pub fn new(existing: HashSet<GuestId>) -> Self {
        Self { taken: existing }
    }

    /// Reserve and record a fresh id
    pub fn allocate(&mut self) -> GuestId {
        let id = reserve_id(&self.taken);
        self.taken.insert(id.clone());
        id
    }

    pub fn contains(&self, id: &GuestId) -> bool {
        self.taken.contains(id)
    }
}
