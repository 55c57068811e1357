use super::*;
use shared::models::Guest;
use shared::seating::{SeatingCommandPayload, SeatingEventType};
use std::sync::{Arc, Mutex};

fn create_test_plan() -> SeatingPlan {
    let guests = GuestBook::new(vec![
        Guest::new("vip-1", "Victoria", "VIP").vip(),
        Guest::new("fam-1", "Ana", "Family"),
        Guest::new("fam-2", "Ben", "Family").with_dietary("Peanut Allergy"),
        Guest::new("fam-3", "Carla", "Family"),
    ]);
    SeatingPlan::new(&Config::default(), guests)
}

/// Plan with `count` plain guests `g0..g{count-1}`
fn plan_with_guests(count: usize) -> SeatingPlan {
    let guests = (0..count)
        .map(|i| Guest::new(format!("g{i}"), format!("Guest {i}"), "Friends"))
        .collect();
    SeatingPlan::new(&Config::default(), guests)
}

/// Record every event the plan emits
fn record_events(plan: &mut SeatingPlan) -> Arc<Mutex<Vec<SeatingEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    plan.on_event(move |event| sink.lock().unwrap().push(event.clone()));
    log
}

fn event_types(log: &Arc<Mutex<Vec<SeatingEvent>>>) -> Vec<SeatingEventType> {
    log.lock().unwrap().iter().map(|e| e.event_type).collect()
}

fn create_table_cmd(shape: TableShape) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::CreateTable { shape })
}

fn assign_cmd(guest_id: &str, table_id: &str) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::AssignGuest {
        guest_id: guest_id.to_string(),
        table_id: table_id.to_string(),
    })
}

mod test_commands;
mod test_scenarios;
