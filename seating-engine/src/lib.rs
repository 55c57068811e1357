//! Seating Engine - 座位编排引擎
//!
//! # 架构概述
//!
//! 把宾客安排到餐桌上，同时维护容量与唯一座位约束、检测冲突、计算座位几何，
//! 并驱动指针拖拽移动餐桌。
//!
//! # 模块结构
//!
//! ```text
//! seating-engine/src/
//! ├── core/          # 配置、错误
//! ├── utils/         # 日志
//! ├── registry/      # 餐桌注册表、默认命名
//! ├── guests/        # 宾客目录
//! ├── assignment/    # 入座 / 离座
//! ├── conflicts/     # 冲突检测
//! ├── geometry/      # 座位几何
//! ├── drag/          # 拖拽状态机
//! ├── preview/       # 只读预览与统计
//! └── plan/          # 命令门面、事件、线程安全句柄
//! ```

pub mod assignment;
pub mod conflicts;
pub mod core;
pub mod drag;
pub mod geometry;
pub mod guests;
pub mod plan;
pub mod preview;
pub mod registry;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, SeatingError, SeatingResult};
pub use drag::{DragController, DragRelease, DragState};
pub use geometry::SeatLayout;
pub use guests::{GuestBook, GuestDirectory};
pub use plan::{SeatingPlan, SharedSeatingPlan};
pub use preview::{Preview, PreviewMode, PreviewRenderer, PreviewStats};
pub use registry::{NamingPolicy, TableRegistry};

// Re-export logger functions
pub use utils::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，按配置初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}
