//! Arrangement - the pool, the tables and per-table display metadata
//!
//! Table metadata is keyed by table index and stored apart from membership,
//! mirroring the persisted document. A missing entry means "use the default":
//! alias `Table {index+1}`, number `index+1`, capacity = configured table size.

use crate::models::{Guest, GuestId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Where a guest currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestLocation {
    Pool,
    Table(usize),
}

/// Display summary of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub index: usize,
    pub alias: String,
    pub number: u32,
    pub capacity: u32,
    pub seated: usize,
    /// Membership exceeds capacity (advisory only)
    pub oversized: bool,
}

/// Full seating state for one wedding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    /// Unassigned guests
    pub pool: Vec<Guest>,
    /// Table membership, in insertion order
    pub tables: Vec<Vec<Guest>>,
    pub table_aliases: BTreeMap<usize, String>,
    pub table_sizes: BTreeMap<usize, u32>,
    pub table_numbers: BTreeMap<usize, u32>,
}

impl Arrangement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrangement with `count` empty tables and default metadata
    pub fn with_tables(count: usize) -> Self {
        Self {
            tables: vec![Vec::new(); count],
            ..Self::default()
        }
    }

    // ========== Metadata ==========

    pub fn default_alias(index: usize) -> String {
        format!("Table {}", index + 1)
    }

    pub fn alias(&self, index: usize) -> String {
        self.table_aliases
            .get(&index)
            .cloned()
            .unwrap_or_else(|| Self::default_alias(index))
    }

    /// Alias for messages; a custom alias keeps the 1-based table position
    pub fn label(&self, index: usize) -> String {
        match self.table_aliases.get(&index) {
            Some(alias) if *alias != Self::default_alias(index) => {
                format!("{} (#{})", alias, index + 1)
            }
            _ => Self::default_alias(index),
        }
    }

    pub fn number(&self, index: usize) -> u32 {
        self.table_numbers
            .get(&index)
            .copied()
            .unwrap_or(index as u32 + 1)
    }

    pub fn capacity(&self, index: usize, default_size: u32) -> u32 {
        self.table_sizes.get(&index).copied().unwrap_or(default_size)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn table_summary(&self, index: usize, default_size: u32) -> Option<TableSummary> {
        let members = self.tables.get(index)?;
        let capacity = self.capacity(index, default_size);
        Some(TableSummary {
            index,
            alias: self.alias(index),
            number: self.number(index),
            capacity,
            seated: members.len(),
            oversized: members.len() > capacity as usize,
        })
    }

    pub fn table_summaries(&self, default_size: u32) -> Vec<TableSummary> {
        (0..self.tables.len())
            .filter_map(|i| self.table_summary(i, default_size))
            .collect()
    }

    /// Sum of all table capacities
    pub fn total_capacity(&self, default_size: u32) -> u64 {
        (0..self.tables.len())
            .map(|i| u64::from(self.capacity(i, default_size)))
            .sum()
    }

    // ========== Guests ==========

    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    /// Pool plus seated guests
    pub fn total_guests(&self) -> usize {
        self.pool.len() + self.seated_count()
    }

    /// Every guest, pool first then tables in order
    pub fn all_guests(&self) -> impl Iterator<Item = &Guest> {
        self.pool.iter().chain(self.tables.iter().flatten())
    }

    pub fn all_guests_mut(&mut self) -> impl Iterator<Item = &mut Guest> {
        self.pool.iter_mut().chain(self.tables.iter_mut().flatten())
    }

    pub fn guest_ids(&self) -> HashSet<GuestId> {
        self.all_guests().map(|g| g.id.clone()).collect()
    }

    pub fn find_guest(&self, id: &GuestId) -> Option<&Guest> {
        self.all_guests().find(|g| &g.id == id)
    }

    pub fn locate(&self, id: &GuestId) -> Option<GuestLocation> {
        if self.pool.iter().any(|g| &g.id == id) {
            return Some(GuestLocation::Pool);
        }
        self.tables
            .iter()
            .position(|members| members.iter().any(|g| &g.id == id))
            .map(GuestLocation::Table)
    }

    /// Companions currently linked to `primary_id`, wherever they sit
    pub fn companions_of(&self, primary_id: &GuestId) -> usize {
        self.all_guests()
            .filter(|g| g.original_guest_id() == Some(primary_id))
            .count()
    }

    /// Remove a guest from a specific location, returning it
    pub fn take_from(&mut self, location: GuestLocation, id: &GuestId) -> Option<Guest> {
        let members = match location {
            GuestLocation::Pool => &mut self.pool,
            GuestLocation::Table(index) => self.tables.get_mut(index)?,
        };
        let pos = members.iter().position(|g| &g.id == id)?;
        Some(members.remove(pos))
    }

    /// Remove a guest from wherever it currently sits
    pub fn take(&mut self, id: &GuestId) -> Option<(Guest, GuestLocation)> {
        let location = self.locate(id)?;
        self.take_from(location, id).map(|g| (g, location))
    }

    /// Verify every guest id appears exactly once across pool and tables
    ///
    /// Returns the first duplicated id on violation.
    pub fn check_ownership(&self) -> Result<(), GuestId> {
        let mut seen = HashSet::new();
        for guest in self.all_guests() {
            if !seen.insert(&guest.id) {
                return Err(guest.id.clone());
            }
        }
        Ok(())
    }
}
