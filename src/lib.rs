// ==========================================
// 清扫值日排班系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (排班结果可人工调整)
// 核心约束: 相同输入必须产生逐字节相同的排班结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排班规则
pub mod engine;

// 配置层 - 区域角色配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AreaPriority, Gender, GenderRestriction, StaffRole};

// 领域实体
pub use domain::{
    Area, Assignment, FairnessSignals, PlannerPick, PlannerRotation, RunOptions, ScheduleRecord,
    ScheduleResult, Staff,
};

// 引擎
pub use engine::{
    derive_seed, AreaAssignmentStep, EligibilityFilter, HeadcountPolicy, OverflowDistributor,
    ScheduleOrchestrator, SeededRandom,
};

// 配置
pub use config::AreaRoleConfig;

// API
pub use api::{ApiError, ApiResult, ScheduleApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "清扫值日排班系统";
