//! JSON export of an arrangement

use crate::seating::ordering::sorted;
use shared::seating::{
    Arrangement, EXPORT_VERSION, ExportMetadata, ExportedArrangement, ExportedTable,
};

/// Presentation flags recorded in the export metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub view_mode: String,
    pub is_grouped: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            view_mode: "tables".to_string(),
            is_grouped: false,
        }
    }
}

/// Build the export document
///
/// The pool and every table are emitted in display order (companions after
/// their primary).
pub fn build_export(
    wedding_name: &str,
    arrangement: &Arrangement,
    default_table_size: u32,
    options: &ExportOptions,
) -> ExportedArrangement {
    let tables = arrangement
        .tables
        .iter()
        .enumerate()
        .map(|(index, members)| ExportedTable {
            table_number: arrangement.number(index),
            seated_guests: members.len(),
            max_capacity: arrangement.capacity(index, default_table_size),
            guests: sorted(members),
        })
        .collect();

    ExportedArrangement {
        wedding_name: wedding_name.to_string(),
        export_date: chrono::Utc::now().to_rfc3339(),
        total_guests: arrangement.total_guests(),
        total_tables: arrangement.table_count(),
        guest_list: sorted(&arrangement.pool),
        tables,
        metadata: ExportMetadata {
            view_mode: options.view_mode.clone(),
            is_grouped: options.is_grouped,
            version: EXPORT_VERSION.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Guest;

    #[test]
    fn test_export_shape() {
        let mut a = Arrangement::with_tables(2);
        a.pool = vec![
            Guest::companion("5-2", "Ana", "Ruiz +1", "", "5"),
            Guest::primary("5", "Ana", "Ruiz", ""),
        ];
        a.tables[1] = vec![Guest::primary("7", "Bo", "Lee", "")];
        a.table_numbers.insert(1, 12);
        a.table_sizes.insert(1, 6);

        let export = build_export("Ana & Bo", &a, 10, &ExportOptions::default());
        assert_eq!(export.total_guests, 3);
        assert_eq!(export.total_tables, 2);
        assert_eq!(export.guest_list[0].id.as_str(), "5");
        assert_eq!(export.guest_list[1].id.as_str(), "5-2");
        assert_eq!(export.tables[0].table_number, 1);
        assert_eq!(export.tables[0].max_capacity, 10);
        assert_eq!(export.tables[1].table_number, 12);
        assert_eq!(export.tables[1].seated_guests, 1);
        assert_eq!(export.tables[1].max_capacity, 6);
        assert_eq!(export.metadata.version, "1.0");
        assert!(chrono::DateTime::parse_from_rfc3339(&export.export_date).is_ok());
    }

    #[test]
    fn test_export_json_field_names() {
        let a = Arrangement::with_tables(1);
        let options = ExportOptions {
            view_mode: "groups".to_string(),
            is_grouped: true,
        };
        let json = serde_json::to_value(build_export("W", &a, 8, &options)).unwrap();
        assert_eq!(json["weddingName"], "W");
        assert_eq!(json["tables"][0]["maxCapacity"], 8);
        assert_eq!(json["tables"][0]["seatedGuests"], 0);
        assert_eq!(json["metadata"]["viewMode"], "groups");
        assert_eq!(json["metadata"]["isGrouped"], true);
        assert!(json["guestList"].as_array().unwrap().is_empty());
    }
}
