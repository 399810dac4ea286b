// ==========================================
// 清扫值日排班系统 - 配置层
// ==========================================
// 职责: 排班策略的可配置部分(特殊区域角色表)
// ==========================================

pub mod area_roles;

pub use area_roles::AreaRoleConfig;
