use super::*;
use shared::seating::{CommandStatus, DraggedGuest, GuestRow, MultiDrag, SkipReason};

fn test_config() -> SeatingConfig {
    SeatingConfig {
        default_table_size: 4,
    }
}

fn create_test_manager() -> SeatingManager {
    SeatingManager::new("wedding-test", test_config())
}

// ========================================================================
// Helper: manager with numbered guests in the pool and empty tables
// ========================================================================

fn manager_with_guests(guests: usize, tables: usize) -> SeatingManager {
    let mut arrangement = Arrangement::with_tables(tables);
    arrangement.pool = (1..=guests)
        .map(|i| {
            Guest::primary(
                i.to_string(),
                format!("Guest{}", i),
                "Test",
                if i % 2 == 0 { "Family" } else { "Friends" },
            )
        })
        .collect();
    SeatingManager::with_arrangement("wedding-test", arrangement, test_config())
}

fn guest_in(manager: &SeatingManager, id: &str) -> Guest {
    manager
        .find_guest(&id.into())
        .cloned()
        .unwrap_or_else(|| panic!("guest {} should exist", id))
}

fn move_to_table(manager: &mut SeatingManager, id: &str, target: usize) -> CommandResponse {
    let payload = manager.drag_payload(&id.into()).expect("guest should exist");
    manager.execute(SeatingCommandPayload::MoveToTable {
        payload,
        target_table_index: target,
    })
}

fn ids(guests: &[Guest]) -> Vec<&str> {
    guests.iter().map(|g| g.id.as_str()).collect()
}

fn assert_skipped(resp: &CommandResponse, reason: SkipReason) {
    assert_eq!(resp.status, CommandStatus::Skipped, "{:?}", resp);
    assert_eq!(resp.skip_reason, Some(reason));
}

mod test_guests;
