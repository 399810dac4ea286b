// ==========================================
// 清扫值日排班系统 - 区域角色配置
// ==========================================
// 职责: 以配置数据承载特殊区域策略,不在引擎里写死区域 ID
// 存储位置由外部配置层决定,引擎只读快照
// ==========================================

use crate::domain::types::AreaId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// AreaRoleConfig - 特殊区域角色表
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaRoleConfig {
    /// 弹性阶段最先处理的区域(趁人员池最充裕时优先拿人)
    #[serde(default)]
    pub pinned_flexible_area: Option<AreaId>,

    /// 空间受限区域(厕所/厨房类),溢出分配尽量靠后且满员后跳过
    #[serde(default)]
    pub strict_space_areas: HashSet<AreaId>,

    /// 优先增援区域(事务所/阳台类),溢出分配优先吸收多余人员
    #[serde(default)]
    pub priority_overflow_areas: HashSet<AreaId>,
}

impl AreaRoleConfig {
    pub fn is_pinned_flexible(&self, area_id: &str) -> bool {
        self.pinned_flexible_area
            .as_deref()
            .map(|pinned| pinned == area_id)
            .unwrap_or(false)
    }

    pub fn is_strict_space(&self, area_id: &str) -> bool {
        self.strict_space_areas.contains(area_id)
    }

    pub fn is_priority_overflow(&self, area_id: &str) -> bool {
        self.priority_overflow_areas.contains(area_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let roles = AreaRoleConfig::default();
        assert!(!roles.is_pinned_flexible("a16"));
        assert!(!roles.is_strict_space("a1"));
        assert!(!roles.is_priority_overflow("a9"));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = r#"{
            "pinned_flexible_area": "a16",
            "strict_space_areas": ["a1", "a2"],
            "priority_overflow_areas": ["a9"]
        }"#;

        let roles: AreaRoleConfig = serde_json::from_str(json).unwrap();
        assert!(roles.is_pinned_flexible("a16"));
        assert!(roles.is_strict_space("a2"));
        assert!(roles.is_priority_overflow("a9"));

        let back = serde_json::to_string(&roles).unwrap();
        let again: AreaRoleConfig = serde_json::from_str(&back).unwrap();
        assert_eq!(again.pinned_flexible_area.as_deref(), Some("a16"));
    }

    #[test]
    fn test_missing_fields_default() {
        let roles: AreaRoleConfig = serde_json::from_str("{}").unwrap();
        assert!(roles.pinned_flexible_area.is_none());
        assert!(roles.strict_space_areas.is_empty());
    }
}
