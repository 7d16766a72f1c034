//! Guest list ingestion
//!
//! Turns raw rows into guest records in two passes:
//!
//! 1. every row whose last name does not end in a "+N" marker becomes a
//!    primary guest with a fresh id
//! 2. every "+N" row becomes a companion linked to the primary with the same
//!    first name and base last name; with no such primary it is demoted to
//!    a standalone primary
//!
//! Rows missing a first or last name never produce a guest. Primaries come
//! out before companions.

mod csv;
mod encoding;

pub use csv::{ParsedRows, parse_guest_rows};
pub use encoding::{DecodedText, decode_best, invalid_markers};

use crate::seating::identity::IdBatch;
use regex::Regex;
use shared::models::{Guest, GuestId, UNGROUPED};
use shared::seating::GuestRow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

/// `"<base> +<digits>"` at the end of a last name
static COMPANION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s+\+(\d+)$").expect("companion suffix pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("No valid guests found ({rows} rows read)")]
    NoValidGuests { rows: usize },
}

/// Outcome of resolving one batch of rows
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Primaries first, then companions
    pub guests: Vec<Guest>,
    /// Rows missing a first or last name
    pub dropped: usize,
    pub companions: usize,
    /// "+N" rows with no matching primary, kept as primaries
    pub orphans: usize,
}

/// Split a companion last name into its base, if it carries a "+N" marker
pub fn companion_base(last_name: &str) -> Option<&str> {
    COMPANION_SUFFIX
        .captures(last_name)
        .and_then(|caps| caps.get(1))
        .map(|base| base.as_str().trim())
        .filter(|base| !base.is_empty())
}

/// Resolve raw rows into guests whose ids avoid `existing`
pub fn resolve_rows(
    rows: &[GuestRow],
    existing: &HashSet<GuestId>,
) -> Result<IngestReport, IngestError> {
    let mut report = IngestReport::default();
    let mut ids = IdBatch::new(existing.clone());

    let valid: Vec<(&str, &str, String)> = rows
        .iter()
        .filter_map(|row| {
            let first = row.first_name.trim();
            let last = row.last_name.trim();
            if first.is_empty() || last.is_empty() {
                return None;
            }
            let group = row
                .group
                .as_deref()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .unwrap_or(UNGROUPED)
                .to_string();
            Some((first, last, group))
        })
        .collect();
    report.dropped = rows.len() - valid.len();

    // Pass 1: primaries. A later duplicate name replaces the earlier one as
    // the companion target.
    let mut primaries: Vec<Guest> = Vec::new();
    let mut by_name: HashMap<(&str, &str), GuestId> = HashMap::new();
    let mut pending: Vec<(&str, &str, &str, String)> = Vec::new();
    for (first, last, group) in valid {
        match companion_base(last) {
            Some(base) => pending.push((first, last, base, group)),
            None => {
                let id = ids.allocate();
                by_name.insert((first, last), id.clone());
                primaries.push(Guest::primary(id, first, last, group));
            }
        }
    }

    // Pass 2: companions
    let mut companions: Vec<Guest> = Vec::new();
    for (first, last, base, group) in pending {
        let id = ids.allocate();
        match by_name.get(&(first, base)) {
            Some(primary_id) => {
                companions.push(Guest::companion(id, first, last, group, primary_id.clone()));
                report.companions += 1;
            }
            None => {
                tracing::warn!(
                    first_name = first,
                    last_name = last,
                    "Companion row has no matching primary guest, importing as primary"
                );
                report.orphans += 1;
                primaries.push(Guest::primary(id, first, last, group));
            }
        }
    }

    report.guests = primaries;
    report.guests.append(&mut companions);

    if report.guests.is_empty() {
        return Err(IngestError::NoValidGuests { rows: rows.len() });
    }
    tracing::debug!(
        guests = report.guests.len(),
        companions = report.companions,
        orphans = report.orphans,
        dropped = report.dropped,
        "Resolved guest rows"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(first: &str, last: &str, group: Option<&str>) -> GuestRow {
        GuestRow::new(first, last, group)
    }

    #[test]
    fn test_companion_base() {
        assert_eq!(companion_base("Smith +1"), Some("Smith"));
        assert_eq!(companion_base("van der Berg  +2"), Some("van der Berg"));
        assert_eq!(companion_base("Smith"), None);
        assert_eq!(companion_base("Smith+1"), None);
        assert_eq!(companion_base("+1"), None);
    }

    #[test]
    fn test_companions_link_to_primaries() {
        let rows = vec![
            row("Jane", "Smith +1", Some("Family")),
            row("Jane", "Smith", Some("Family")),
            row("Bo", "Lee", None),
        ];
        let report = resolve_rows(&rows, &HashSet::new()).unwrap();
        assert_eq!(report.guests.len(), 3);
        assert_eq!(report.companions, 1);

        let jane = &report.guests[0];
        assert!(jane.is_primary());
        assert_eq!(jane.full_name(), "Jane Smith");
        assert_eq!(report.guests[1].group, UNGROUPED);

        let plus_one = &report.guests[2];
        assert!(plus_one.is_companion());
        assert_eq!(plus_one.original_guest_id(), Some(&jane.id));
        assert_eq!(plus_one.last_name, "Smith +1");
    }

    #[test]
    fn test_orphan_companion_becomes_primary() {
        let rows = vec![row("Max", "Power +1", None)];
        let report = resolve_rows(&rows, &HashSet::new()).unwrap();
        assert_eq!(report.orphans, 1);
        assert!(report.guests[0].is_primary());
        assert_eq!(report.guests[0].last_name, "Power +1");
    }

    #[test]
    fn test_duplicate_primary_names_link_to_last() {
        let rows = vec![
            row("Ana", "Ruiz", None),
            row("Ana", "Ruiz", None),
            row("Ana", "Ruiz +1", None),
        ];
        let report = resolve_rows(&rows, &HashSet::new()).unwrap();
        let second = &report.guests[1];
        assert_eq!(report.guests[2].original_guest_id(), Some(&second.id));
    }

    #[test]
    fn test_rows_missing_names_are_dropped() {
        let rows = vec![row("", "Smith", None), row("Jo", "  ", None), row("Al", "Bo", None)];
        let report = resolve_rows(&rows, &HashSet::new()).unwrap();
        assert_eq!(report.guests.len(), 1);
        assert_eq!(report.dropped, 2);
    }

    #[test]
    fn test_no_valid_guests() {
        let rows = vec![row("", "", None)];
        assert_eq!(
            resolve_rows(&rows, &HashSet::new()).unwrap_err(),
            IngestError::NoValidGuests { rows: 1 }
        );
        assert!(resolve_rows(&[], &HashSet::new()).is_err());
    }

    #[test]
    fn test_ids_avoid_existing() {
        let existing: HashSet<GuestId> = (0..50).map(|i| GuestId::new(i.to_string())).collect();
        let rows: Vec<GuestRow> = (0..20).map(|i| row("G", &format!("N{}", i), None)).collect();
        let report = resolve_rows(&rows, &existing).unwrap();
        let ids: HashSet<&GuestId> = report.guests.iter().map(|g| &g.id).collect();
        assert_eq!(ids.len(), 20);
        assert!(ids.iter().all(|id| !existing.contains(id)));
    }
}
