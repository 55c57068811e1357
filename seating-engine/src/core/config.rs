use crate::geometry::SeatLayout;
use crate::registry::NamingPolicy;
use shared::models::Point;

/// Default table capacity for newly created tables
pub const DEFAULT_CAPACITY: u32 = 8;
/// Pointer travel (px, per axis) before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;
/// Canvas coordinate every new table spawns at
pub const DEFAULT_SPAWN: Point = Point::new(100.0, 100.0);

/// 引擎配置 - 座位编排引擎的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | SEATING_DEFAULT_CAPACITY | 8 | 新桌默认座位数 |
/// | SEATING_SPAWN_X / SEATING_SPAWN_Y | 100 / 100 | 新桌出生坐标 |
/// | SEATING_DRAG_THRESHOLD | 5 | 点击/拖动判定阈值 (px) |
/// | SEATING_ROUND_RADIUS | 80 | 圆桌座位半径 |
/// | SEATING_SEAT_PITCH | 50 | 长桌座位间距 |
/// | SEATING_ROW_OFFSET | 55 | 长桌行距中心偏移 |
/// | SEATING_ROUND_NAME | Friends | 圆桌默认名称 |
/// | SEATING_RECTANGLE_NAME | Colleagues | 长桌默认名称 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 是否输出 JSON 日志 |
/// | LOG_DIR | (unset) | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// SEATING_DEFAULT_CAPACITY=10 LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 新桌默认座位数
    pub default_capacity: u32,
    /// 新桌出生坐标 (所有新桌重叠，需手动拖开)
    pub spawn_position: Point,
    /// 点击/拖动判定阈值
    pub drag_threshold: f64,
    /// 座位几何参数
    pub seat_layout: SeatLayout,
    /// 按桌型的默认命名策略
    pub naming: NamingPolicy,
    /// 日志级别
    pub log_level: String,
    /// JSON 日志
    pub log_json: bool,
    /// 日志目录 (None 表示仅控制台)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_capacity: env_parse("SEATING_DEFAULT_CAPACITY")
                .filter(|c: &u32| *c > 0)
                .unwrap_or(defaults.default_capacity),
            spawn_position: Point::new(
                env_parse("SEATING_SPAWN_X").unwrap_or(defaults.spawn_position.x),
                env_parse("SEATING_SPAWN_Y").unwrap_or(defaults.spawn_position.y),
            ),
            drag_threshold: env_parse("SEATING_DRAG_THRESHOLD")
                .filter(|t: &f64| *t >= 0.0)
                .unwrap_or(defaults.drag_threshold),
            seat_layout: SeatLayout {
                round_radius: env_parse("SEATING_ROUND_RADIUS")
                    .unwrap_or(defaults.seat_layout.round_radius),
                seat_pitch: env_parse("SEATING_SEAT_PITCH")
                    .unwrap_or(defaults.seat_layout.seat_pitch),
                row_offset: env_parse("SEATING_ROW_OFFSET")
                    .unwrap_or(defaults.seat_layout.row_offset),
            },
            naming: NamingPolicy::new(
                std::env::var("SEATING_ROUND_NAME").unwrap_or(defaults.naming.round),
                std::env::var("SEATING_RECTANGLE_NAME").unwrap_or(defaults.naming.rectangle),
            ),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env_parse("LOG_JSON").unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 是否输出到日志文件
    pub fn has_log_dir(&self) -> bool {
        self.log_dir.is_some()
    }
}

/// Built-in defaults; does not read the environment
impl Default for Config {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            spawn_position: DEFAULT_SPAWN,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            seat_layout: SeatLayout::default(),
            naming: NamingPolicy::default(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
