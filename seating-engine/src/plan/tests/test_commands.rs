use super::*;
use shared::seating::CommandErrorCode;

#[test]
fn test_create_table_command() {
    let mut plan = create_test_plan();

    let response = plan.execute_command(create_table_cmd(TableShape::Round));

    assert!(response.success);
    let table_id = response.table_id.unwrap();
    let table = plan.table(&table_id).unwrap();
    assert_eq!(table.name, "Friends");
    assert_eq!(table.capacity, 8);
    assert_eq!(table.position(), Point::new(100.0, 100.0));
    assert_eq!(response.events.len(), 1);
    assert_eq!(response.events[0].event_type, SeatingEventType::TableCreated);
}

#[test]
fn test_events_carry_command_id_and_sequence() {
    let mut plan = create_test_plan();
    let log = record_events(&mut plan);
    let table_id = plan
        .execute_command(create_table_cmd(TableShape::Round))
        .table_id
        .unwrap();

    let cmd = assign_cmd("fam-2", &table_id);
    let command_id = cmd.command_id.clone();
    let response = plan.execute_command(cmd);

    assert!(response.success);
    let types: Vec<_> = response.events.iter().map(|e| e.event_type).collect();
    assert_eq!(
        types,
        vec![
            SeatingEventType::GuestAssigned,
            SeatingEventType::ConflictsChanged
        ]
    );
    assert!(
        response
            .events
            .iter()
            .all(|e| e.command_id.as_deref() == Some(command_id.as_str()))
    );

    let sequences: Vec<u64> = log.lock().unwrap().iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert_eq!(plan.next_sequence(), 4);
}

#[test]
fn test_rejected_command_emits_nothing() {
    let mut plan = plan_with_guests(2);
    let log = record_events(&mut plan);
    let table_id = plan.create_table(TableShape::Round).id;
    plan.update_table(&table_id, TableUpdate::capacity(1)).unwrap();
    plan.assign_guest("g0", &table_id);
    let before = log.lock().unwrap().len();

    let response = plan.execute_command(assign_cmd("g1", &table_id));

    assert!(!response.success);
    assert!(response.events.is_empty());
    assert_eq!(response.error.unwrap().code, CommandErrorCode::TableFull);
    assert_eq!(log.lock().unwrap().len(), before);
}

#[test]
fn test_unknown_table_command() {
    let mut plan = create_test_plan();

    let response = plan.execute_command(SeatingCommand::new(
        SeatingCommandPayload::MoveTable {
            table_id: "missing".to_string(),
            x: 0.0,
            y: 0.0,
        },
    ));

    let error = response.error.unwrap();
    assert_eq!(error.code, CommandErrorCode::TableNotFound);
    assert!(error.message.contains("missing"));
}

#[test]
fn test_delete_command_reports_unseated_guests() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;
    plan.assign_guest("fam-2", &table_id);

    let response = plan.execute_command(SeatingCommand::new(
        SeatingCommandPayload::DeleteTable {
            table_id: table_id.clone(),
        },
    ));

    assert!(response.success);
    assert_eq!(response.events.len(), 1);
    match &response.events[0].payload {
        EventPayload::TableDeleted {
            unseated_guest_ids, ..
        } => assert_eq!(unseated_guest_ids, &vec!["fam-2".to_string()]),
        other => panic!("unexpected payload: {other:?}"),
    }
    assert!(plan.guests().guest("fam-2").unwrap().assigned_table_id.is_none());
}

#[test]
fn test_command_round_trips_through_json() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Rectangle).id;

    let json = format!(
        r#"{{"command_id":"cmd-1","timestamp":0,"payload":{{"type":"UPDATE_TABLE","table_id":"{table_id}","patch":{{"name":"Head Table"}}}}}}"#
    );
    let cmd: SeatingCommand = serde_json::from_str(&json).unwrap();
    let response = plan.execute_command(cmd);

    assert!(response.success);
    assert_eq!(plan.table(&table_id).unwrap().name, "Head Table");

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["command_id"], "cmd-1");
    assert_eq!(value["events"][0]["event_type"], "TABLE_UPDATED");
}

#[test]
fn test_conflict_labels_in_events() {
    let mut plan = create_test_plan();
    let table_id = plan.create_table(TableShape::Round).id;
    let response = plan.execute_command(assign_cmd("fam-2", &table_id));

    let value = serde_json::to_value(&response.events[1]).unwrap();
    assert_eq!(value["payload"]["type"], "CONFLICTS_CHANGED");
    assert_eq!(
        value["payload"]["conflicts"][0],
        "Critical: Food Allergy at Table"
    );
}
