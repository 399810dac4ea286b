// ==========================================
// 清扫值日排班系统 - 人员领域模型
// ==========================================
// 用途: 人员目录写入,排班引擎只读
// 引擎视角下一次运行内不可变
// ==========================================

use crate::domain::types::{AreaId, Gender, StaffId, StaffRole};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// Staff - 人员主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    // ===== 主键 =====
    pub id: StaffId, // 人员唯一标识

    // ===== 基础信息 =====
    pub name: String,   // 姓名
    pub gender: Gender, // 性别
    #[serde(default = "default_active")]
    pub active: bool, // 是否在职
    #[serde(default)]
    pub role: StaffRole, // 角色(regular/planner)
    #[serde(default)]
    pub department: Option<String>, // 部门

    // ===== 排班约束 =====
    #[serde(default)]
    pub floor_restriction: Option<i32>, // 楼层限制(None=不限)
    #[serde(default)]
    pub exclude_areas: HashSet<AreaId>, // 个人禁排区域
}

fn default_active() -> bool {
    true
}

impl Staff {
    /// 该人员是否被禁止进入指定区域
    pub fn excludes_area(&self, area_id: &str) -> bool {
        self.exclude_areas.contains(area_id)
    }
}
