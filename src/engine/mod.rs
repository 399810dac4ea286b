// ==========================================
// 清扫值日排班系统 - 引擎层
// ==========================================
// 职责: 实现排班业务规则,纯内存计算
// 红线: 引擎不做 I/O,所有降级必须输出告警或跳过记录
// ==========================================

pub mod assignment;
pub mod eligibility;
pub mod headcount;
pub mod orchestrator;
pub mod overflow;
pub mod seeded_random;

// 重导出核心引擎
pub use assignment::AreaAssignmentStep;
pub use eligibility::EligibilityFilter;
pub use headcount::{HeadcountPolicy, AMPLE_POOL_THRESHOLD};
pub use orchestrator::ScheduleOrchestrator;
pub use overflow::OverflowDistributor;
pub use seeded_random::{derive_seed, SeededRandom};
