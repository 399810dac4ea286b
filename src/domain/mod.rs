// ==========================================
// 清扫值日排班系统 - 领域层
// ==========================================
// 职责: 实体与值对象定义,引擎一次运行内全部只读
// ==========================================

pub mod area;
pub mod history;
pub mod rotation;
pub mod schedule;
pub mod staff;
pub mod types;

pub use area::Area;
pub use history::FairnessSignals;
pub use rotation::{PlannerPick, PlannerRotation};
pub use schedule::{Assignment, RunOptions, ScheduleRecord, ScheduleResult};
pub use staff::Staff;
