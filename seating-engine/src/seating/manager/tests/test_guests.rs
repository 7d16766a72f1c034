use super::*;
use shared::error::ErrorCode;
use shared::models::UNGROUPED;

#[test]
fn test_add_guest_grows_tables_to_fit() {
    let mut manager = create_test_manager();
    for i in 0..5 {
        let resp = manager.execute(SeatingCommandPayload::AddGuest {
            first_name: format!("G{}", i),
            last_name: "Test".to_string(),
            group: None,
        });
        assert!(resp.is_applied());
    }
    let a = manager.arrangement();
    assert_eq!(a.pool.len(), 5);
    // 5 guests at 4 seats per table
    assert_eq!(a.table_count(), 2);
    assert!(a.pool.iter().all(|g| g.group == UNGROUPED));
}

#[test]
fn test_plus_one_flow() {
    let mut manager = manager_with_guests(1, 1);
    assert!(manager.can_add_plus_one(&"1".into()));

    let resp = manager.execute(SeatingCommandPayload::AddPlusOne {
        guest_id: "1".into(),
    });
    assert!(resp.is_applied());
    let companion = guest_in(&manager, "1-2");
    assert_eq!(companion.last_name, "Test +1");
    assert_eq!(companion.first_name, "Guest1");
    assert!(!manager.can_add_plus_one(&"1-2".into()));

    // Delete the companion and add again: the id is reused
    manager.execute(SeatingCommandPayload::DeleteGuests {
        guest_ids: vec!["1-2".into()],
    });
    manager.execute(SeatingCommandPayload::AddPlusOne {
        guest_id: "1".into(),
    });
    assert!(manager.find_guest(&"1-2".into()).is_some());
}

#[test]
fn test_plus_one_on_generated_id_is_not_offered() {
    let mut manager = create_test_manager();
    manager.execute(SeatingCommandPayload::AddGuest {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        group: Some("Family".to_string()),
    });
    let id = manager.arrangement().pool[0].id.clone();
    assert!(!manager.can_add_plus_one(&id));

    let resp = manager.execute(SeatingCommandPayload::AddPlusOne { guest_id: id });
    assert_skipped(&resp, SkipReason::PlusOneNotAllowed);
}

#[test]
fn test_rename_rejects_blank_first_name() {
    let mut manager = manager_with_guests(1, 1);
    let resp = manager.execute(SeatingCommandPayload::RenameGuest {
        guest_id: "1".into(),
        first_name: "   ".to_string(),
        last_name: "Other".to_string(),
    });
    assert_skipped(&resp, SkipReason::FirstNameRequired);
    assert_eq!(guest_in(&manager, "1").first_name, "Guest1");
}

#[test]
fn test_change_group_of_selection() {
    let mut manager = manager_with_guests(3, 1);
    move_to_table(&mut manager, "3", 0);
    manager.toggle_selection(&"1".into());
    manager.toggle_selection(&"3".into());

    let resp = manager.change_group_of_selection("Work");
    assert!(resp.is_applied());
    assert_eq!(guest_in(&manager, "1").group, "Work");
    assert_eq!(guest_in(&manager, "3").group, "Work");
    assert_eq!(guest_in(&manager, "2").group, "Family");
    assert!(manager.selection().is_empty());
}

#[test]
fn test_delete_selection_keeps_seated_guests() {
    let mut manager = manager_with_guests(3, 1);
    move_to_table(&mut manager, "2", 0);
    manager.toggle_selection(&"1".into());
    manager.toggle_selection(&"2".into());

    let resp = manager.delete_selection();
    assert!(resp.is_applied());
    assert_eq!(ids(&manager.arrangement().pool), vec!["3"]);
    assert_eq!(ids(&manager.arrangement().tables[0]), vec!["2"]);
}

#[test]
fn test_skipped_command_keeps_selection() {
    let mut manager = manager_with_guests(2, 1);
    manager.toggle_selection(&"1".into());
    let resp = manager.execute(SeatingCommandPayload::ChangeGroup {
        guest_ids: vec!["404".into()],
        group: "Work".to_string(),
    });
    assert_skipped(&resp, SkipReason::GuestNotFound);
    assert!(manager.selection().contains(&"1".into()));
}

#[test]
fn test_table_metadata_commands() {
    let mut manager = manager_with_guests(0, 1);
    let resp = manager.execute(SeatingCommandPayload::AddTable);
    assert!(resp.is_applied());

    let resp = manager.execute(SeatingCommandPayload::SetTableAlias {
        table_index: 1,
        alias: "Head Table".to_string(),
    });
    assert!(resp.is_applied());
    let resp = manager.execute(SeatingCommandPayload::SetTableNumber {
        table_index: 1,
        value: "abc".to_string(),
    });
    assert_skipped(&resp, SkipReason::InvalidValue);
    let resp = manager.execute(SeatingCommandPayload::SetTableCapacity {
        table_index: 1,
        value: "8".to_string(),
    });
    assert!(resp.is_applied());

    let summary = &manager.table_summaries()[1];
    assert_eq!(summary.alias, "Head Table");
    assert_eq!(summary.number, 2);
    assert_eq!(summary.capacity, 8);
}

#[test]
fn test_import_rows() {
    let mut manager = create_test_manager();
    let resp = manager.execute(SeatingCommandPayload::ImportGuests {
        rows: vec![
            GuestRow::new("Jane", "Smith", Some("Family")),
            GuestRow::new("Jane", "Smith +1", Some("Family")),
            GuestRow::new("Max", "Power +1", None),
        ],
    });
    assert!(resp.is_applied());
    let a = manager.arrangement();
    assert_eq!(a.pool.len(), 3);
    assert_eq!(a.pool.iter().filter(|g| g.is_companion()).count(), 1);
    assert_eq!(a.table_count(), 1);
}

#[test]
fn test_import_without_valid_rows_fails() {
    let mut manager = manager_with_guests(2, 1);
    let before = manager.arrangement().clone();
    let resp = manager.execute(SeatingCommandPayload::ImportGuests {
        rows: vec![GuestRow::new("", "Smith", None)],
    });
    assert!(resp.is_failed());
    assert_eq!(resp.error.as_ref().map(|e| e.code), Some(ErrorCode::NoValidGuests));
    assert_eq!(manager.arrangement(), &before);
    assert!(!manager.can_undo());
    assert!(!manager.has_unsaved_changes());
}

#[test]
fn test_import_bytes_decodes_legacy_encoding() {
    let mut manager = create_test_manager();
    let bytes = b"First Name,Last Name,Group\nJos\xE9,Ruiz,Friends\nAna,Ruiz +1,Friends\n";
    let resp = manager.import_bytes(bytes);
    assert!(resp.is_applied());
    let names: Vec<String> = manager
        .arrangement()
        .pool
        .iter()
        .map(|g| g.full_name())
        .collect();
    assert_eq!(names, vec!["José Ruiz", "Ana Ruiz +1"]);
    // "Ana" has no primary named "Ana Ruiz"
    assert!(manager.arrangement().pool.iter().all(|g| g.is_primary()));
}
