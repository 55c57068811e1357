use seating_engine::{GuestBook, PreviewMode, SeatingPlan, print_banner, setup_environment};
use shared::models::{Guest, Point, TableShape, TableUpdate};
use shared::seating::{SeatingCommand, SeatingCommandPayload};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment()?;

    print_banner();
    tracing::info!("Seating engine demo starting...");

    // 2. 宾客目录
    let guests = GuestBook::new(vec![
        Guest::new("g-1", "Victoria Hale", "VIP").vip(),
        Guest::new("g-2", "Tom Reyes", "Family"),
        Guest::new("g-3", "Mia Chen", "Family").with_dietary("Peanut Allergy"),
        Guest::new("g-4", "Leo Park", "Friends"),
        Guest::new("g-5", "Ana Silva", "Colleagues"),
    ]);
    let mut plan = SeatingPlan::new(&config, guests);
    plan.on_event(|event| {
        tracing::info!(
            sequence = event.sequence,
            event_type = %event.event_type,
            "Event emitted"
        );
    });

    // 3. 通过命令建桌、改名
    let head = plan
        .execute_command(SeatingCommand::new(SeatingCommandPayload::CreateTable {
            shape: TableShape::Rectangle,
        }))
        .table_id
        .ok_or_else(|| anyhow::anyhow!("CreateTable returned no table id"))?;
    plan.update_table(
        &head,
        TableUpdate {
            name: Some("Head Table".to_string()),
            capacity: Some(6),
        },
    )?;
    let round = plan.create_table(TableShape::Round).id;

    // 4. 入座
    for (guest_id, table_id) in [("g-1", &head), ("g-2", &head), ("g-3", &round), ("g-4", &round)] {
        let outcome = plan.assign_guest(guest_id, table_id);
        tracing::info!(guest_id, table_id = %table_id, ?outcome, "Assignment");
    }

    // 5. 点选入座
    plan.arm_guest("g-5")?;
    let outcome = plan.place_armed_guest(&round)?;
    tracing::info!(?outcome, "Armed guest placed");

    // 6. 拖开重叠的圆桌
    plan.pointer_down(&round, Point::new(120.0, 120.0))?;
    for step in 1..=20 {
        plan.pointer_move(Point::new(120.0 + 15.0 * f64::from(step), 120.0));
    }
    let release = plan.pointer_up();
    tracing::info!(?release, "Drag finished");

    // 7. 输出预览
    let preview = plan.preview(PreviewMode::Names);
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}
