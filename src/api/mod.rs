// ==========================================
// 清扫值日排班系统 - API 层
// ==========================================
// 职责: 提供业务接口,输入校验在此完成
// ==========================================

pub mod error;
pub mod schedule_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use schedule_api::ScheduleApi;
