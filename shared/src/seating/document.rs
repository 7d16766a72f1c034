//! Persisted and exported arrangement documents
//!
//! Both shapes are owned by external collaborators (browser storage, the
//! remote wedding API, the JSON export); field names must not change.

use super::arrangement::Arrangement;
use crate::models::Guest;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Export format version written to `metadata.version`
pub const EXPORT_VERSION: &str = "1.0";

/// Persisted arrangement document
///
/// Every field may be absent in stored data. Metadata maps are keyed by the
/// table index rendered as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedArrangement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_guest_list: Vec<Guest>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_tables: Vec<Vec<Guest>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_table_aliases: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_table_sizes: HashMap<String, u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub saved_table_numbers: HashMap<String, u32>,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SavedArrangement {
    /// Rebuild the live arrangement from a stored document
    ///
    /// Normalizes what stored data may get wrong:
    /// - a guest id appearing twice keeps its first occurrence (tables are
    ///   scanned before the pool)
    /// - metadata keys that are not table indexes are dropped
    /// - with no stored tables, enough empty tables are created to seat
    ///   every guest at `default_size`
    pub fn into_arrangement(self, default_size: u32) -> Arrangement {
        let mut seen = HashSet::new();
        let mut dropped = 0usize;

        let mut tables = Vec::with_capacity(self.saved_tables.len());
        for members in self.saved_tables {
            let mut kept = Vec::with_capacity(members.len());
            for guest in members {
                if seen.insert(guest.id.clone()) {
                    kept.push(guest);
                } else {
                    dropped += 1;
                }
            }
            tables.push(kept);
        }

        let mut pool = Vec::with_capacity(self.saved_guest_list.len());
        for guest in self.saved_guest_list {
            if seen.insert(guest.id.clone()) {
                pool.push(guest);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, "Dropped duplicate guest ids from stored arrangement");
        }

        if tables.is_empty() && !pool.is_empty() {
            let count = tables_needed(pool.len(), default_size);
            tracing::debug!(
                guests = pool.len(),
                tables = count,
                "Growing tables for stored guests"
            );
            tables = vec![Vec::new(); count];
        }

        Arrangement {
            pool,
            tables,
            table_aliases: index_keyed(self.saved_table_aliases),
            table_sizes: index_keyed(self.saved_table_sizes),
            table_numbers: index_keyed(self.saved_table_numbers),
        }
    }
}

impl From<&Arrangement> for SavedArrangement {
    fn from(arrangement: &Arrangement) -> Self {
        Self {
            saved_guest_list: arrangement.pool.clone(),
            saved_tables: arrangement.tables.clone(),
            saved_table_aliases: string_keyed(&arrangement.table_aliases),
            saved_table_sizes: string_keyed(&arrangement.table_sizes),
            saved_table_numbers: string_keyed(&arrangement.table_numbers),
        }
    }
}

/// Number of tables of `size` seats needed for `guests`
pub fn tables_needed(guests: usize, size: u32) -> usize {
    let size = size.max(1) as usize;
    guests.div_ceil(size)
}

fn index_keyed<V>(map: HashMap<String, V>) -> BTreeMap<usize, V> {
    map.into_iter()
        .filter_map(|(key, value)| key.trim().parse::<usize>().ok().map(|i| (i, value)))
        .collect()
}

fn string_keyed<V: Clone>(map: &BTreeMap<usize, V>) -> HashMap<String, V> {
    map.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

/// One table in the exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTable {
    /// Display number (1-based unless customized)
    pub table_number: u32,
    pub seated_guests: usize,
    pub max_capacity: u32,
    pub guests: Vec<Guest>,
}

/// Export metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub view_mode: String,
    pub is_grouped: bool,
    pub version: String,
}

/// Exported arrangement document (output only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedArrangement {
    pub wedding_name: String,
    /// ISO-8601 timestamp
    pub export_date: String,
    pub total_guests: usize,
    pub total_tables: usize,
    /// Unassigned guests
    pub guest_list: Vec<Guest>,
    pub tables: Vec<ExportedTable>,
    pub metadata: ExportMetadata,
}
