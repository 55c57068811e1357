use super::*;

#[test]
fn test_full_round_table_rejects_ninth_guest() {
    let mut plan = plan_with_guests(9);
    let table_id = plan.create_table(TableShape::Round).id;

    for i in 0..8 {
        assert!(plan.assign_guest(&format!("g{i}"), &table_id).is_applied());
    }
    let outcome = plan.assign_guest("g8", &table_id);

    assert_eq!(outcome, AssignOutcome::TableFull);
    let table = plan.table(&table_id).unwrap();
    assert_eq!(table.guest_ids.len(), 8);
    assert!(table.conflicts.is_empty());
    assert!(plan.guests().guest("g8").unwrap().assigned_table_id.is_none());
}

#[test]
fn test_head_table_vip_mixing() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Rectangle).id;
    plan.update_table(
        &table_id,
        TableUpdate {
            name: Some("Head Table".to_string()),
            capacity: Some(10),
        },
    )
    .unwrap();

    plan.assign_guest("vip-1", &table_id);
    assert!(plan.table(&table_id).unwrap().conflicts.is_empty());
    plan.assign_guest("fam-1", &table_id);

    let conflicts = &plan.table(&table_id).unwrap().conflicts;
    assert!(conflicts.contains(&Conflict::NonVipAtHeadTable));
    assert_eq!(conflicts[0].label(), "Non-VIP at Head Table");
}

#[test]
fn test_allergy_flags_any_table() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;

    plan.assign_guest("fam-2", &table_id);

    assert_eq!(
        plan.table(&table_id).unwrap().conflicts,
        vec![Conflict::FoodAllergy]
    );
    assert_eq!(
        Conflict::FoodAllergy.label(),
        "Critical: Food Allergy at Table"
    );

    plan.unassign_guest("fam-2", &table_id);
    assert!(plan.table(&table_id).unwrap().conflicts.is_empty());
}

#[test]
fn test_occupancy_statistics() {
    let mut plan = plan_with_guests(13);
    let a = plan.create_table(TableShape::Round).id;
    let b = plan.create_table(TableShape::Round).id;
    let c = plan.create_table(TableShape::Rectangle).id;
    plan.update_table(&c, TableUpdate::capacity(10)).unwrap();

    for i in 0..13 {
        let target = match i % 3 {
            0 => &a,
            1 => &b,
            _ => &c,
        };
        assert!(plan.assign_guest(&format!("g{i}"), target).is_applied());
    }

    let stats = plan.stats();
    assert_eq!(stats.table_count, 3);
    assert_eq!(stats.seated_guests, 13);
    assert_eq!(stats.total_capacity, 26);
    assert_eq!(stats.occupancy_percent, 50);
    assert_eq!(plan.preview(PreviewMode::Numbers).stats, stats);
}

#[test]
fn test_reseating_is_atomic() {
    let mut plan = create_test_plan();
    let a = plan.create_table(TableShape::Round).id;
    let b = plan.create_table(TableShape::Round).id;

    plan.assign_guest("fam-1", &a);
    let outcome = plan.assign_guest("fam-1", &b);

    assert_eq!(outcome.previous_table(), Some(a.as_str()));
    assert!(!plan.table(&a).unwrap().has_guest("fam-1"));
    assert!(plan.table(&b).unwrap().has_guest("fam-1"));
    assert_eq!(
        plan.guests().guest("fam-1").unwrap().assigned_table_id.as_deref(),
        Some(b.as_str())
    );
}

#[test]
fn test_capacity_shrink_flags_but_keeps_guests() {
    let mut plan = plan_with_guests(4);
    let table_id = plan.create_table(TableShape::Round).id;
    for i in 0..4 {
        plan.assign_guest(&format!("g{i}"), &table_id);
    }

    plan.update_table(&table_id, TableUpdate::capacity(2)).unwrap();

    let table = plan.table(&table_id).unwrap();
    assert_eq!(table.guest_ids.len(), 4);
    assert_eq!(table.conflicts, vec![Conflict::OverCapacity]);
    assert_eq!(plan.assign_guest("g0", &table_id), AssignOutcome::AlreadyAtTable);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;

    let err = plan
        .update_table(&table_id, TableUpdate::capacity(0))
        .unwrap_err();

    assert!(matches!(err, SeatingError::InvalidCapacity { capacity: 0, .. }));
    assert_eq!(plan.table(&table_id).unwrap().capacity, 8);
}

#[test]
fn test_delete_table_unseats_guests() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;
    plan.assign_guest("fam-1", &table_id);
    plan.assign_guest("fam-3", &table_id);

    plan.delete_table(&table_id).unwrap();

    assert!(plan.tables().is_empty());
    assert_eq!(plan.guests().seated_count(), 0);
    assert_eq!(
        plan.delete_table(&table_id),
        Err(SeatingError::TableNotFound(table_id))
    );
}

#[test]
fn test_edit_guests_recomputes_conflicts() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;
    plan.assign_guest("fam-1", &table_id);

    plan.edit_guests(|guests| {
        if let Some(guest) = guests.get_mut("fam-1") {
            guest.dietary = Some("Shellfish allergy".to_string());
        }
    });

    assert_eq!(
        plan.table(&table_id).unwrap().conflicts,
        vec![Conflict::FoodAllergy]
    );
}

#[test]
fn test_edit_guests_cannot_reseat_guests() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;
    plan.assign_guest("fam-1", &table_id);

    plan.edit_guests(|guests| {
        guests.set_assigned_table("fam-1", None);
        guests.set_assigned_table("fam-3", Some(&table_id));
    });

    let assigned = |id: &str| plan.guests().guest(id).unwrap().assigned_table_id.clone();
    assert_eq!(assigned("fam-1"), Some(table_id.clone()));
    assert_eq!(assigned("fam-3"), None);
    assert_eq!(plan.table(&table_id).unwrap().guest_ids, vec!["fam-1"]);
    assert_eq!(plan.guests().seated_count(), 1);
}

#[test]
fn test_preview_names_mode() {
    let mut plan = plan_with_guests(5);
    let table_id = plan.create_table(TableShape::Round).id;
    plan.create_table(TableShape::Rectangle);
    for i in 0..5 {
        plan.assign_guest(&format!("g{i}"), &table_id);
    }

    let preview = plan.preview(PreviewMode::Names);

    assert_eq!(preview.tables.len(), 2);
    let first = &preview.tables[0];
    assert_eq!(first.title, "Friends");
    assert_eq!(
        first.lines,
        vec!["Guest 0", "Guest 1", "Guest 2", "+2 more"]
    );
    assert_eq!(first.seats.iter().filter(|s| s.occupied).count(), 5);
    assert_eq!(preview.tables[1].lines, vec!["Empty Table"]);
}
